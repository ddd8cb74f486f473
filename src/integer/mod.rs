//! Non-comparison sorts over `i32`.
//!
//! These exploit the value domain instead of a comparator and therefore only exist for
//! integers. Counting sort is restricted to non-negative values, radix and bucket sort accept
//! the full `i32` range.

pub mod bucket;
pub mod counting;
pub mod radix;

/// Returns `(min, max)` of `v`, `None` if it is empty.
fn min_max(v: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = v.split_first()?;

    Some(
        rest.iter()
            .fold((first, first), |(min, max), &x| (min.min(x), max.max(x))),
    )
}
