use tracing::{debug, warn};

use crate::error::SortError;

/// Sorts `v` with counting sort, in *O*(*n* + *k*) where *k* is the largest value.
///
/// The count table has `max + 1` entries, sized by the largest value and not by `v.len()`, so
/// this is only sensible for small values. A single `i32::MAX` asks for 2^31 `usize` entries
/// (16 GiB on 64-bit targets). Negative values are rejected with [`SortError::NegativeValue`],
/// and a count table the allocator refuses with [`SortError::CountTableAlloc`]. Both are
/// detected before `v` is written to, a failed call leaves `v` unchanged.
///
/// With an overcommitting allocator a huge table may be granted and only fail once its pages
/// are touched, which no `Result` can report.
pub fn sort(v: &mut [i32]) -> Result<(), SortError> {
    let Some((min, max)) = super::min_max(v) else {
        return Ok(());
    };

    if min < 0 {
        // Report the first offending element rather than the minimum.
        let index = v.iter().position(|&x| x < 0).unwrap_or_default();
        warn!(index, value = v[index], "counting sort rejected negative value");
        return Err(SortError::NegativeValue {
            index,
            value: v[index],
        });
    }

    let table_len = max as usize + 1;
    let mut counts = zeroed_table(table_len)?;

    debug!(len = v.len(), table_len, "counting sort");

    for &x in v.iter() {
        counts[x as usize] += 1;
    }

    let mut out = 0;
    for (value, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        v[out..out + count].fill(value as i32);
        out += count;
    }

    Ok(())
}

/// Allocates `len` zeroed counters.
///
/// The reservation checks whether the allocator grants the table at all. The table itself comes
/// from `vec![0; len]`, a zeroed allocation that leaves untouched pages unmapped instead of
/// writing every entry.
fn zeroed_table(len: usize) -> Result<Vec<usize>, SortError> {
    let mut reservation: Vec<usize> = Vec::new();
    reservation
        .try_reserve_exact(len)
        .map_err(|source| SortError::CountTableAlloc { len, source })?;
    drop(reservation);

    Ok(vec![0; len])
}
