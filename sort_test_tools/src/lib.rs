use std::cmp::Ordering;

use tracing_subscriber::EnvFilter;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Installs a fmt subscriber filtered by `RUST_LOG` that writes through the test harness. Safe
/// to call from every test, only the first call per process has an effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub mod patterns;

/// Generates one `#[test]` per generic check in [`tests`] for the given `Sort` implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests_gen!(
            $sort_impl,
            basic,
            fixed_scenarios,
            random,
            random_u64,
            random_d20,
            random_zipf,
            random_string,
            random_transactions_by_amount,
            ascending,
            descending,
            saw,
            pipe_organ,
            all_equal,
            int_edge,
            sort_by_reverse,
            case_insensitive,
            idempotent,
            self_cmp,
            violate_ord_retain_orig_elems,
        );
    };
}

/// Same as [`instantiate_sort_tests`] plus the checks that only hold for stable sorts.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_tests_gen!($sort_impl, stability, stability_transactions);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_tests_gen {
    ($sort_impl:ty, $($test_fn:ident),* $(,)?) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::init_tracing();
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
}
