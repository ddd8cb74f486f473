use std::cmp::Ordering;

sort_impl!("quick_lomuto_unstable");

/// Sorts the slice with quicksort, using the Lomuto partition scheme and the last element as
/// pivot.
///
/// Not stable. *O*(*n* \* log(*n*)) on average, but *O*(*n*^2) for already sorted or reverse
/// sorted input, where the last element is always the worst possible pivot. Only the shorter
/// side of each partition is recursed into, which caps the recursion depth at *O*(log(*n*))
/// even when the running time degrades.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Lomuto partition around the last element of `v`.
///
/// Moves every element that is not greater than the pivot to the front, then places the pivot
/// right after them. Returns the final position of the pivot. `v` must not be empty.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut store = 0;

    for i in 0..pivot {
        if !is_less(&v[pivot], &v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }

    v.swap(store, pivot);
    store
}
