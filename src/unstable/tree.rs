use std::cmp::Ordering;

sort_impl!("tree_bst_unstable");

/// Sorts the slice by inserting every element into a binary search tree and reading the tree
/// back in order.
///
/// The tree is not rebalanced, so sorted or reverse sorted input degenerates it into a list and
/// the sort into *O*(*n*^2). Average case is *O*(*n* \* log(*n*)). Needs *O*(*n*) auxiliary
/// memory for the tree plus the traversal buffer.
///
/// Insertion and traversal are iterative, a degenerate tree costs time but not stack.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    tree_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    tree_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Children of the node that holds `v[i]` are stored at `nodes[i]`.
#[derive(Clone, Copy, Default)]
struct Node {
    left: Option<usize>,
    right: Option<usize>,
}

fn tree_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The tree links element indices, the elements themselves stay in `v` until the final
    // permutation is applied.
    let mut nodes = vec![Node::default(); len];

    for i in 1..len {
        insert(v, &mut nodes, i, is_less);
    }

    let order = in_order(&nodes);
    apply_permutation(v, order);
}

fn insert<T, F>(v: &[T], nodes: &mut [Node], new: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut node = 0;

    loop {
        // Ties go right.
        let link = if is_less(&v[new], &v[node]) {
            &mut nodes[node].left
        } else {
            &mut nodes[node].right
        };

        match *link {
            Some(child) => node = child,
            None => {
                *link = Some(new);
                return;
            }
        }
    }
}

/// Returns the element indices in in-order sequence, the tree is rooted at index 0.
fn in_order(nodes: &[Node]) -> Vec<usize> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = Vec::new();
    let mut current = Some(0);

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = nodes[node].left;
        }

        match stack.pop() {
            Some(node) => {
                order.push(node);
                current = nodes[node].right;
            }
            None => break,
        }
    }

    order
}

/// Rearranges `v` so that `v[k]` afterwards holds what was `v[order[k]]`. Follows each cycle of
/// the permutation with swaps, so nothing has to be cloned or moved out of `v`.
fn apply_permutation<T>(v: &mut [T], mut order: Vec<usize>) {
    const DONE: usize = usize::MAX;

    for start in 0..v.len() {
        let mut pos = start;

        while order[pos] != DONE {
            let src = order[pos];
            order[pos] = DONE;

            if src == start {
                break;
            }

            v.swap(pos, src);
            pos = src;
        }
    }
}
