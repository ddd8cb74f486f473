use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every generated pattern in this process. Set `OVERRIDE_SEED` to reproduce a
/// failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());
    tracing::debug!(seed, "pattern seed");
    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

pub fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Public ---

/// Uniformly distributed values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Few distinct values, lots of duplicates.
pub fn random_d20(len: usize) -> Vec<i32> {
    random_uniform(len, 0..20)
}

/// Zipf distributed values in `1..=len`, small values are far more common than large ones.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of random values, concatenated.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }

    vals
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mid = len / 2;
    let mut vals = random(len);

    vals[..mid].sort_unstable();
    vals[mid..].sort_unstable_by(|a, b| b.cmp(a));

    vals
}

/// Mixed-case ASCII words of 5 to 14 letters.
pub fn random_strings(len: usize) -> Vec<String> {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut rng = new_seeded_rng();

    (0..len)
        .map(|_| {
            let word_len = rng.gen_range(5..15);
            (0..word_len)
                .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
                .collect()
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: u32,
    pub name: String,
    pub amount: f64,
}

/// Transactions with sequential ids and amounts in `0.0..10_000.0`.
///
/// Amounts are rounded to whole units so that equal amounts, and with it stability, actually
/// get exercised.
pub fn transactions(len: usize) -> Vec<Transaction> {
    let mut rng = new_seeded_rng();
    let names = random_strings(len);

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Transaction {
            id: i as u32 + 1,
            name,
            amount: rng.gen_range(0.0..10_000.0f64).round(),
        })
        .collect()
}
