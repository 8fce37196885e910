use avl_bst::unbalanced::Tree;

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a set, checking after every one that they agree.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(k) => bst.insert(k.clone()) == set.insert(k.clone()),
        Op::Remove(k) => bst.remove(k) == set.take(k),
        Op::Contains(k) => bst.contains(k) == set.contains(k),
    })
}

#[test]
fn two_child_deletion_uses_successor() {
    init_logging();
    let mut tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(tree.remove(&5), Some(5));

    assert_eq!(tree.root().map(|root| *root.key()), Some(7));
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![1, 3, 4, 7, 8, 9]
    );
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.iter().eq(set.iter())
            && tree.size() == set.len()
    }
}

quickcheck::quickcheck! {
    fn matches_balanced_tree(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut plain: Tree<_> = xs.iter().copied().collect();
        let mut balanced: avl_bst::avl::Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            if plain.remove(delete) != balanced.remove(delete) {
                return false;
            }
        }

        plain.iter().eq(balanced.iter())
    }
}
