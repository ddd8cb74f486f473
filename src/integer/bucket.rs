use std::num::NonZeroUsize;

use tracing::debug;

use crate::error::SortError;
use crate::stable::insertion::insertion_sort;

pub const DEFAULT_BUCKET_COUNT: usize = 10;

const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BUCKET_COUNT) {
    Some(count) => count,
    None => panic!("DEFAULT_BUCKET_COUNT must be non-zero"),
};

/// Sorts `v` with bucket sort using [`DEFAULT_BUCKET_COUNT`] buckets.
pub fn sort(v: &mut [i32]) {
    bucket_sort(v, DEFAULT_BUCKETS);
}

/// Sorts `v` with bucket sort, distributing values linearly between the minimum and maximum
/// over `bucket_count` buckets.
///
/// Every bucket is sorted with insertion sort and the buckets are concatenated. Close to *O*(*n*)
/// for uniformly distributed values, degrading to *O*(*n*^2) when most values land in the same
/// bucket. At most `v.len()` buckets are allocated, a larger count can only add empty buckets.
///
/// Empty and single-element slices are accepted with any `bucket_count`. Otherwise a zero
/// `bucket_count` returns [`SortError::ZeroBuckets`] and `v` is left unchanged.
pub fn sort_with_buckets(v: &mut [i32], bucket_count: usize) -> Result<(), SortError> {
    if v.len() < 2 {
        return Ok(());
    }

    let bucket_count = NonZeroUsize::new(bucket_count).ok_or(SortError::ZeroBuckets)?;
    bucket_sort(v, bucket_count);

    Ok(())
}

fn bucket_sort(v: &mut [i32], bucket_count: NonZeroUsize) {
    let Some((min, max)) = super::min_max(v) else {
        return;
    };

    // `v` is non-empty here, so the clamped count stays non-zero.
    let bucket_count = bucket_count.get().min(v.len());

    // i128 holds the full range of an i32 difference times any bucket count.
    let range = max as i128 - min as i128 + 1;
    let scale = bucket_count as i128;

    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); bucket_count];
    for &x in v.iter() {
        // `x - min < range`, so the index stays below `bucket_count`.
        let index = (x as i128 - min as i128) * scale / range;
        buckets[index as usize].push(x);
    }

    debug!(
        len = v.len(),
        bucket_count,
        largest_bucket = buckets.iter().map(Vec::len).max().unwrap_or(0),
        "bucket sort distribution"
    );

    let mut out = 0;
    for bucket in buckets.iter_mut() {
        insertion_sort(bucket.as_mut_slice(), &mut |a: &i32, b: &i32| a < b);

        v[out..out + bucket.len()].copy_from_slice(bucket);
        out += bucket.len();
    }
}
