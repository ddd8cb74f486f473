use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_algorithms_rs::integer::{bucket, counting, radix};
use sort_algorithms_rs::{stable, unstable};
use sort_test_tools::patterns::{self, Transaction};
use sort_test_tools::Sort;

// Beyond a few thousand elements the quadratic sorts dominate the whole run.
const BENCH_SIZES: [usize; 2] = [100, 5_000];

fn cmp_ignore_case(a: &String, b: &String) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

fn cmp_amount(a: &Transaction, b: &Transaction) -> Ordering {
    a.amount.total_cmp(&b.amount)
}

fn bench_generic<S: Sort>(c: &mut Criterion) {
    let name = S::name();

    for len in BENCH_SIZES {
        let ints = patterns::random(len);
        c.bench_with_input(BenchmarkId::new(format!("i32-{name}"), len), &ints, |b, data| {
            b.iter_batched_ref(|| data.clone(), |v| S::sort(black_box(v)), BatchSize::SmallInput)
        });

        let strings = patterns::random_strings(len);
        c.bench_with_input(BenchmarkId::new(format!("string-{name}"), len), &strings, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |v| S::sort_by(black_box(v), cmp_ignore_case),
                BatchSize::SmallInput,
            )
        });

        let transactions = patterns::transactions(len);
        c.bench_with_input(
            BenchmarkId::new(format!("transaction_by_amount-{name}"), len),
            &transactions,
            |b, data| {
                b.iter_batched_ref(
                    || data.clone(),
                    |v| S::sort_by(black_box(v), cmp_amount),
                    BatchSize::SmallInput,
                )
            },
        );
    }
}

fn bench_integer(c: &mut Criterion) {
    for len in BENCH_SIZES {
        // Counting sort needs non-negative values and a table as large as the maximum.
        let small = patterns::random_uniform(len, 0..1_000_000);
        let full = patterns::random(len);

        c.bench_with_input(BenchmarkId::new("i32-counting", len), &small, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |v| counting::sort(black_box(v)),
                BatchSize::SmallInput,
            )
        });

        c.bench_with_input(BenchmarkId::new("i32-radix_lsd10", len), &full, |b, data| {
            b.iter_batched_ref(|| data.clone(), |v| radix::sort(black_box(v)), BatchSize::SmallInput)
        });

        c.bench_with_input(BenchmarkId::new("i32-bucket", len), &full, |b, data| {
            b.iter_batched_ref(|| data.clone(), |v| bucket::sort(black_box(v)), BatchSize::SmallInput)
        });
    }
}

fn bench_all(c: &mut Criterion) {
    sort_test_tools::init_tracing();

    bench_generic::<stable::rust_std::SortImpl>(c);
    bench_generic::<stable::bubble::SortImpl>(c);
    bench_generic::<stable::insertion::SortImpl>(c);
    bench_generic::<stable::merge::SortImpl>(c);

    bench_generic::<unstable::selection::SortImpl>(c);
    bench_generic::<unstable::shell::SortImpl>(c);
    bench_generic::<unstable::heap::SortImpl>(c);
    bench_generic::<unstable::quick::SortImpl>(c);
    bench_generic::<unstable::tree::SortImpl>(c);

    bench_integer(c);
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
