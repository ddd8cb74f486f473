use std::cmp::Ordering;
use std::mem::size_of;
use std::ptr;

sort_impl!("merge_stable");

/// Sorts the slice with a top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. It allocates temporary storage half the size of `v`. Recursion depth is
/// *O*(log(*n*)) regardless of the input pattern.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a top-down merge sort and a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original
/// elements remain in `v`. The same is true if `compare` panics.
///
/// This sort is stable and *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Allocate a buffer to use as scratch memory. We keep the length 0 so we can keep in it
    // shallow copies of the contents of `v` without risking the dtors running on copies if
    // `is_less` panics. Every merge copies out its left run, which is at most `len / 2` long.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    // SAFETY: `buf` has capacity for the longest left run and `T` is not zero-sized.
    unsafe {
        merge_sort_rec(v, buf.as_mut_ptr(), is_less);
    }
}

/// Splits `v` at the midpoint, sorts both halves and merges them.
///
/// # Safety
///
/// `buf` must be valid for writes of `v.len() / 2` elements and must not alias `v`.
unsafe fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;

    merge_sort_rec(&mut v[..mid], buf, is_less);
    merge_sort_rec(&mut v[mid..], buf, is_less);
    merge(v, mid, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// Only the left run is copied out. Writes into `v` can never overtake the read position of the
/// right run, so the right run is merged from where it already lies.
///
/// # Safety
///
/// `mid` must be in bounds, `buf` must be valid for writes of `mid` elements and must not alias
/// `v`. `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v = v.as_mut_ptr();

    let (v_mid, v_end) = (v.add(mid), v.add(len));

    ptr::copy_nonoverlapping(v, buf, mid);

    // If `is_less` panics, `hole` gets dropped and copies the unconsumed part of the left run
    // into the gap in `v`. That gap is exactly as long as the remainder, so `v` ends up holding
    // every element exactly once.
    let mut hole = MergeHole {
        start: buf,
        end: buf.add(mid),
        dest: v,
    };
    let mut right = v_mid;

    while hole.start < hole.end && right < v_end {
        // If equal, prefer the left run to maintain stability.
        let is_l = is_less(&*right, &*hole.start);
        let to_copy = if is_l { right } else { hole.start };
        ptr::copy_nonoverlapping(to_copy, hole.dest, 1);
        hole.dest = hole.dest.add(1);
        right = right.add(is_l as usize);
        hole.start = hole.start.add(!is_l as usize);
    }

    // Either the left run is exhausted and the rest of the right run already sits in place, or
    // the right run is exhausted and dropping `hole` moves the left remainder to the end.
}

struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` holds initialized elements that are
        // no longer present in `v`, and `dest` points at a gap of the same length.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
