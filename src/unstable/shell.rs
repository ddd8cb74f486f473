use std::cmp::Ordering;

sort_impl!("shell_unstable");

/// Sorts the slice with shell sort, using the gap sequence `len / 2, len / 4, ..., 1`.
///
/// Not stable. Between *O*(*n*^1.3) and *O*(*n*^2) depending on the input, the halving gaps are
/// the simplest but not the best sequence.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        // Gapped insertion sort, every `gap`-th element forms a chain that ends up sorted.
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
