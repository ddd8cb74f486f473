use std::cmp::Ordering;

sort_impl!("insertion_stable");

/// Sorts the slice with insertion sort.
///
/// This sort is stable and *O*(*n*^2) worst-case, but close to linear for nearly sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with insertion sort and a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` by inserting every element into the sorted prefix before it.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]`.
///
/// The key only moves past strictly greater predecessors, which keeps equal elements in their
/// original order.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let key = v.len() - 1;
    let mut pos = key;

    while pos > 0 && is_less(&v[key], &v[pos - 1]) {
        pos -= 1;
    }

    // Shift the greater predecessors one slot right and drop the key into the gap.
    v[pos..].rotate_right(1);
}
