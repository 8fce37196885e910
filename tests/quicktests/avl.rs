use avl_bst::avl::Tree;
use avl_bst::EmptyTreeError;

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set, checking after every one that they agree
/// and that the tree is still balanced.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(k) => bst.insert(k.clone()) == set.insert(k.clone()),
            Op::Remove(k) => bst.remove(k) == set.take(k),
            Op::Contains(k) => bst.contains(k) == set.contains(k),
        };
        agrees && bst.check_balance().is_ok()
    })
}

#[test]
fn sorted_scenario() {
    init_logging();
    let mut tree = Tree::new();
    for key in [5, 3, 8, 1, 4, 7, 9, 2, 6].iter() {
        tree.insert(*key);
    }

    assert_eq!(tree.size(), 9);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
    assert!(tree.check_balance().is_ok());
    assert_eq!(tree.find_min(), Ok(&1));
    assert_eq!(tree.find_max(), Ok(&9));
}

#[test]
fn empty_tree_errors() {
    init_logging();
    let tree = Tree::<String>::new();

    assert_eq!(tree.find_min(), Err(EmptyTreeError));
    assert_eq!(tree.find_max().unwrap_err().to_string(), "tree is empty");
}

#[test]
fn large_ascending_build_stays_shallow() {
    init_logging();
    let tree: Tree<u32> = (0..100_000).collect();

    assert_eq!(tree.size(), 100_000);
    // An AVL tree with 100k nodes is at most 24 levels tall.
    assert!(tree.root().map_or(false, |root| root.height() < 24));
    assert!(tree.check_balance().is_ok());
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.iter().eq(set.iter())
            && tree.size() == set.len()
            && tree.find_min().ok() == set.iter().next()
            && tree.find_max().ok() == set.iter().next_back()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter().filter(|x| !added.contains(*x)).all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.check_balance().is_ok()
    }
}
