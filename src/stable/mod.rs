pub mod bubble;

pub mod insertion;

pub mod merge;

// Calls slice::sort, the reference point for the hand-written sorts.
pub mod rust_std;
