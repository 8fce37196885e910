//! The storage unit shared by both trees.
//!
//! A [`Node`] owns its two children outright through [`Link`]s. There are no parent pointers and
//! no shared subtrees, so releasing a link releases everything below it. The second type
//! parameter is whatever per-node bookkeeping a tree wants to cache: the AVL tree stores its
//! subtree height there while the unbalanced tree stores nothing (`()`).

use std::cmp::Ordering;

/// An owning, possibly empty, pointer to a subtree.
pub type Link<K, H = ()> = Option<Box<Node<K, H>>>;

/// A key plus two owned children and some cached metadata `H`.
#[derive(Clone, Debug)]
pub struct Node<K, H = ()> {
    pub(crate) key: K,
    pub(crate) left: Link<K, H>,
    pub(crate) right: Link<K, H>,
    pub(crate) height: H,
}

impl<K, H> Node<K, H> {
    /// Construct a childless node holding `key`.
    pub(crate) fn new(key: K, height: H) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children at all.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Replaces the left subtree, handing back the one it replaced.
    pub(crate) fn set_left(&mut self, left: Link<K, H>) -> Link<K, H> {
        std::mem::replace(&mut self.left, left)
    }

    /// Replaces the right subtree, handing back the one it replaced.
    pub(crate) fn set_right(&mut self, right: Link<K, H>) -> Link<K, H> {
        std::mem::replace(&mut self.right, right)
    }

    pub(crate) fn take_left(&mut self) -> Link<K, H> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<K, H> {
        self.right.take()
    }

    /// Follows left children to the bottom of this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Follows right children to the bottom of this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// Walks down from `root` following the search-tree ordering and returns the node whose key
/// compares equal to `key`, if any.
pub(crate) fn find<'a, K, H>(root: Option<&'a Node<K, H>>, key: &K) -> Option<&'a Node<K, H>>
where
    K: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Releases a whole subtree using an explicit stack instead of the recursive `Box` drop, which
/// would overflow on a degenerate (list-shaped) tree.
pub(crate) fn dismantle<K, H>(link: Link<K, H>) {
    let mut pending: Vec<Box<Node<K, H>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.take_left());
        pending.extend(node.take_right());
    }
}
