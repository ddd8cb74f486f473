pub mod heap;

pub mod quick;

pub mod selection;

pub mod shell;

// Unbalanced binary search tree, filled by insertion and read back in order.
pub mod tree;
