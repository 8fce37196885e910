//! Errors reported by the trees.

use thiserror::Error;

use crate::avl::Height;

/// Returned by `find_min`/`find_max` when there is nothing in the tree to return.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("tree is empty")]
pub struct EmptyTreeError;

/// A broken AVL invariant found by [`avl::Tree::check_balance`][crate::avl::Tree::check_balance].
///
/// This never comes out of the normal insert/remove paths. It exists so tests can assert that
/// every node's cached height and balance are what they should be.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BalanceViolation {
    /// A node's cached height disagrees with the height recomputed from its children.
    #[error("cached height {cached} does not match computed height {computed}")]
    StaleHeight {
        /// The height stored in the node.
        cached: Height,
        /// One more than the taller child's height.
        computed: Height,
    },
    /// A node's subtrees differ in height by more than the allowed imbalance.
    #[error("subtree heights {left} and {right} differ by more than one")]
    Imbalanced {
        /// Height of the left subtree.
        left: Height,
        /// Height of the right subtree.
        right: Height,
    },
}
