//! Textbook sorting algorithms over mutable slices.
//!
//! Generic comparison sorts live in [`stable`] and [`unstable`], each module exposing `sort` for
//! the natural order and `sort_by` for a caller supplied comparator. The integer-only
//! non-comparison sorts live in [`integer`].

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod error;
pub mod integer;
pub mod stable;
pub mod unstable;

pub use error::SortError;
