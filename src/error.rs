use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the sorts that restrict their input domain.
///
/// Every check happens before the first write, a slice handed to a failing call is left as it
/// was.
#[derive(Debug, Error)]
pub enum SortError {
    /// Counting sort only handles non-negative values.
    #[error("counting sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i32 },

    #[error("failed to allocate a count table of {len} entries")]
    CountTableAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("bucket sort needs at least one bucket")]
    ZeroBuckets,
}
