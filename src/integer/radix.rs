use tracing::trace;

const RADIX: i64 = 10;

// Signed digits range from -9 to 9, shifted by 9 into table slots 0..19.
const DIGIT_OFFSET: i64 = RADIX - 1;
const DIGIT_SLOTS: usize = (2 * RADIX - 1) as usize;

/// Sorts `v` with a least significant digit first radix sort in base 10.
///
/// Each pass is a stable counting sort by one decimal digit, the number of passes is the digit
/// count of the largest magnitude. Negative values keep the sign on every digit, which orders
/// them correctly without a separate pass. `i32::MIN` is handled, magnitudes are computed with
/// `unsigned_abs` and digits in `i64`.
///
/// *O*(*d* \* (*n* + *b*)) with *d* digits and *b* = 19 digit slots. Allocates one scratch
/// buffer of `v.len()` elements.
pub fn sort(v: &mut [i32]) {
    if v.len() < 2 {
        return;
    }

    let max_magnitude = v.iter().map(|x| x.unsigned_abs()).max().unwrap_or(0) as i64;

    let mut buf = vec![0; v.len()];
    let mut exp: i64 = 1;
    let mut passes = 0;

    while max_magnitude / exp > 0 {
        sort_by_digit(v, &mut buf, exp);
        exp *= RADIX;
        passes += 1;
    }

    trace!(len = v.len(), passes, "radix sort");
}

fn digit_slot(x: i32, exp: i64) -> usize {
    // Truncating division keeps the sign, -123 yields the digits -3, -2, -1.
    ((x as i64 / exp) % RADIX + DIGIT_OFFSET) as usize
}

/// Stable counting sort of `v` by the digit at `exp`, `buf` must be as long as `v`.
fn sort_by_digit(v: &mut [i32], buf: &mut [i32], exp: i64) {
    let mut counts = [0usize; DIGIT_SLOTS];

    for &x in v.iter() {
        counts[digit_slot(x, exp)] += 1;
    }

    // Turn the counts into end positions.
    for i in 1..DIGIT_SLOTS {
        counts[i] += counts[i - 1];
    }

    // Walking backwards keeps equal digits in their current order.
    for &x in v.iter().rev() {
        let slot = digit_slot(x, exp);
        counts[slot] -= 1;
        buf[counts[slot]] = x;
    }

    v.copy_from_slice(buf);
}
