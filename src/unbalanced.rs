//! A plain Binary Search Tree with no rebalancing. It has the same interface as
//! [`avl::Tree`][crate::avl::Tree] and exists as a baseline to measure the balanced tree against.
//! Inserting keys in sorted order degrades it into a linked list with `O(N)` height, so every
//! walk here is a loop rather than recursion.
//!
//! # Examples
//!
//! ```
//! use avl_bst::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! for key in 1..=5 {
//!     tree.insert(key);
//! }
//!
//! // No rotations: the root is whatever went in first.
//! assert_eq!(tree.root().map(|root| *root.key()), Some(1));
//!
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find_min(), Ok(&2));
//! assert_eq!(tree.size(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::error::EmptyTreeError;
use crate::iter;
use crate::node::{self, Link, Node};

/// Sorted iterator over the keys of a [`Tree`].
pub type Iter<'a, K> = iter::Iter<'a, K>;

/// An ordered set of keys kept in an unbalanced Binary Search Tree.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        iter::display_sorted(self.iter(), f)
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the keys in the tree by walking all of them.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Same as [`Tree::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Drops every key in the tree.
    pub fn clear(&mut self) {
        debug!("clearing unbalanced tree");
        node::dismantle(self.root.take());
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        iter::Iter::new(self.root())
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree holds no keys.
    pub fn find_min(&self) -> Result<&K, EmptyTreeError> {
        self.root()
            .map(|root| root.leftmost().key())
            .ok_or(EmptyTreeError)
    }

    /// Returns the largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree holds no keys.
    pub fn find_max(&self) -> Result<&K, EmptyTreeError> {
        self.root()
            .map(|root| root.rightmost().key())
            .ok_or(EmptyTreeError)
    }

    /// The number of nodes on the longest path from the root down, minus one. An empty tree has
    /// height -1.
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<K>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` unless an equal key is already present. Returns whether the key was
    /// inserted.
    pub fn insert(&mut self, key: K) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *cursor = Some(Box::new(Node::new(key, ())));
        true
    }

    /// Removes the key equal to `key` and returns it. If the tree does not contain such a key,
    /// nothing happens.
    ///
    /// The node is found and spliced out in the same walk down the tree.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let mut cursor = &mut self.root;
        loop {
            let ordering = key.cmp(&cursor.as_ref()?.key);
            if ordering == Ordering::Equal {
                break;
            }
            let node = cursor.as_mut()?;
            cursor = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let mut target = cursor.take()?;
        match (target.take_left(), target.take_right()) {
            (None, only_child) | (only_child, None) => {
                trace!("splicing out node with at most one child");
                *cursor = only_child;
                let Node { key: removed, .. } = *target;
                Some(removed)
            }
            (Some(left), Some(right)) => {
                trace!("replacing node with its successor");
                target.set_left(Some(left));
                target.set_right(Some(right));
                let removed = take_min(&mut target.right)
                    .map(|successor| std::mem::replace(&mut target.key, successor));
                *cursor = Some(target);
                removed
            }
        }
    }

    /// Whether the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key that compares equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        node::find(self.root(), key).map(Node::key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// Detaches the smallest node below `link`, splicing its right subtree into its place, and
/// returns its key.
fn take_min<K>(link: &mut Link<K>) -> Option<K> {
    let mut cursor = link;
    while cursor.as_ref()?.left.is_some() {
        cursor = &mut cursor.as_mut()?.left;
    }
    let min = cursor.take()?;
    let Node { key, right, .. } = *min;
    *cursor = right;
    Some(key)
}
