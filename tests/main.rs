use sort_test_tools::{instantiate_sort_tests, instantiate_stable_sort_tests};

mod bubble {
    use super::*;

    instantiate_stable_sort_tests!(sort_algorithms_rs::stable::bubble::SortImpl);
}

mod insertion {
    use super::*;

    instantiate_stable_sort_tests!(sort_algorithms_rs::stable::insertion::SortImpl);
}

mod merge {
    use super::*;

    instantiate_stable_sort_tests!(sort_algorithms_rs::stable::merge::SortImpl);
}

mod rust_std {
    use super::*;

    instantiate_stable_sort_tests!(sort_algorithms_rs::stable::rust_std::SortImpl);
}

mod selection {
    use super::*;

    instantiate_sort_tests!(sort_algorithms_rs::unstable::selection::SortImpl);
}

mod shell {
    use super::*;

    instantiate_sort_tests!(sort_algorithms_rs::unstable::shell::SortImpl);
}

mod heap {
    use super::*;

    instantiate_sort_tests!(sort_algorithms_rs::unstable::heap::SortImpl);
}

mod quick {
    use super::*;

    instantiate_sort_tests!(sort_algorithms_rs::unstable::quick::SortImpl);
}

mod tree {
    use super::*;

    instantiate_sort_tests!(sort_algorithms_rs::unstable::tree::SortImpl);
}
