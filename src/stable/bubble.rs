use std::cmp::Ordering;

sort_impl!("bubble_stable");

/// Sorts the slice with bubble sort.
///
/// This sort is stable and *O*(*n*^2) worst-case. A pass that performs no swap ends the sort, so
/// already sorted input costs a single pass.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with bubble sort and a comparator function.
///
/// If the comparator does not implement a total order the resulting order is unspecified, all
/// original elements remain in `v`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut swapped = false;

        // After pass `i` the largest `i + 1` elements sit in their final place.
        for j in 0..len - i - 1 {
            // Only swap strictly greater neighbours to keep equal elements in order.
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
