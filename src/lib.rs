//! This crate exposes a self-balancing Binary Search Tree (an AVL tree) along with a plain,
//! unbalanced BST to compare it against.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! The [`avl`] tree is that clever construction. It caches the height of every subtree and,
//! whenever an insert or removal leaves some node with one subtree two levels taller than the
//! other, rotates nodes around until the difference is at most one again. The [`unbalanced`] tree
//! does none of this, so inserting keys in sorted order leaves it as tall as it is large.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod iter;
pub mod node;
pub mod unbalanced;

pub use error::{BalanceViolation, EmptyTreeError};
