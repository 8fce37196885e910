//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Every node caches the height of the subtree rooted at it. After each structural change the
//! nodes on the changed path are rebalanced from the bottom up so that no node's subtrees ever
//! differ in height by more than [`ALLOWED_IMBALANCE`]. That keeps the height, and therefore every
//! lookup, insert and removal, at `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use avl_bst::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.find_min().is_err());
//!
//! // Ascending inserts would make a plain BST a linked list. Here they get rotated into shape.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.root().map(|root| root.height()), Some(2));
//!
//! // Inserting a key that is already present does nothing.
//! assert!(!tree.insert(4));
//! assert_eq!(tree.size(), 7);
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&4), Some(4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&7));
//! assert!(tree.check_balance().is_ok());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace, warn};

use crate::error::{BalanceViolation, EmptyTreeError};
use crate::iter;
use crate::node::{self, Link, Node};

/// The height of a subtree. A lone node has height 0 and an empty subtree has height -1.
pub type Height = isize;

/// The largest difference in height allowed between the two subtrees of any node.
pub const ALLOWED_IMBALANCE: Height = 1;

const EMPTY_HEIGHT: Height = -1;
const LEAF_HEIGHT: Height = 0;

type AvlLink<K> = Link<K, Height>;
type AvlNode<K> = Node<K, Height>;

/// Sorted iterator over the keys of a [`Tree`].
pub type Iter<'a, K> = iter::Iter<'a, K, Height>;

fn link_height<K>(link: &AvlLink<K>) -> Height {
    link.as_ref().map_or(EMPTY_HEIGHT, |n| n.height)
}

/// An ordered set of keys kept in an AVL tree. Keys are compared with [`Ord`] and each distinct
/// key is stored at most once.
#[derive(Clone)]
pub struct Tree<K> {
    root: AvlLink<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
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

    /// Counts the keys in the tree. This walks every node so it is `O(N)`.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Same as [`Tree::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Drops every key in the tree.
    pub fn clear(&mut self) {
        debug!("clearing AVL tree");
        self.root = None;
    }

    /// Iterates over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        iter::Iter::new(self.root())
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K, Height>> {
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

    /// Verifies every node's cached height and balance. Meant for tests and debugging; the public
    /// operations never leave the tree in a state this rejects.
    pub fn check_balance(&self) -> Result<(), BalanceViolation> {
        check_subtree(&self.root).map(|_| ()).map_err(|violation| {
            warn!("AVL invariant violated: {}", violation);
            violation
        })
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` unless an equal key is already present. Returns whether the key was
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = insert_into(self.root.take(), key);
        self.root = Some(root);
        inserted
    }

    /// Removes the key equal to `key` and returns it. If the tree does not contain such a key,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        remove_from(&mut self.root, key)
    }

    /// Whether the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key that compares equal to `key`. Useful when keys carry data that
    /// doesn't take part in the ordering.
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

/// Inserts `key` into the subtree at `link` and returns the new root of that subtree along with
/// whether anything was inserted. Every node on the path back up is rebalanced.
fn insert_into<K>(link: AvlLink<K>, key: K) -> (Box<AvlNode<K>>, bool)
where
    K: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Box::new(Node::new(key, LEAF_HEIGHT)), true),
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert_into(node.take_left(), key);
            node.set_left(Some(left));
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert_into(node.take_right(), key);
            node.set_right(Some(right));
            inserted
        }
    };

    if cfg!(debug_assertions) {
        if let Some(left) = node.left() {
            assert!(node.key > left.key);
        }
        if let Some(right) = node.right() {
            assert!(node.key < right.key);
        }
    }

    if inserted {
        (node.balance(), true)
    } else {
        (node, false)
    }
}

/// Removes the key equal to `key` from the subtree at `link`, replacing `link` with the
/// rebalanced remainder.
fn remove_from<K>(link: &mut AvlLink<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let mut node = link.take()?;

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove_from(&mut node.left, key),
        Ordering::Greater => remove_from(&mut node.right, key),
        Ordering::Equal => match (node.take_left(), node.take_right()) {
            (None, only_child) | (only_child, None) => {
                trace!("splicing out AVL node with at most one child");
                *link = only_child;
                let Node { key: removed, .. } = *node;
                return Some(removed);
            }
            (Some(left), Some(right)) => {
                // The successor comes out of the right subtree only, leaving the rest of the tree
                // alone until the rebalancing on the way back up.
                trace!("replacing AVL node with its successor");
                let (right, successor) = take_min(right);
                node.set_left(Some(left));
                node.set_right(right);
                Some(std::mem::replace(&mut node.key, successor))
            }
        },
    };

    *link = Some(if removed.is_some() {
        node.balance()
    } else {
        node
    });
    removed
}

/// Detaches the smallest node of the subtree rooted at `node`. Returns the rebalanced remainder
/// and the detached key.
fn take_min<K>(mut node: Box<AvlNode<K>>) -> (AvlLink<K>, K) {
    match node.take_left() {
        Some(left) => {
            let (left, min) = take_min(left);
            node.set_left(left);
            (Some(node.balance()), min)
        }
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
    }
}

/// Recomputes the heights of the subtree at `link` from scratch, comparing them against the
/// cached ones. Returns the subtree's height.
fn check_subtree<K>(link: &AvlLink<K>) -> Result<Height, BalanceViolation> {
    let node = match link {
        Some(node) => node,
        None => return Ok(EMPTY_HEIGHT),
    };

    let left = check_subtree(&node.left)?;
    let right = check_subtree(&node.right)?;
    let computed = left.max(right) + 1;

    if node.height != computed {
        return Err(BalanceViolation::StaleHeight {
            cached: node.height,
            computed,
        });
    }
    if (left - right).abs() > ALLOWED_IMBALANCE {
        return Err(BalanceViolation::Imbalanced { left, right });
    }
    Ok(computed)
}

impl<K> Node<K, Height> {
    /// How many levels are below this node. A node with no children has a height of 0.
    pub fn height(&self) -> Height {
        self.height
    }

    /// Sets the height of `self` to one more than the taller child's height.
    fn fix_height(&mut self) {
        self.height = link_height(&self.left).max(link_height(&self.right)) + 1;
    }

    /// Restores the AVL invariant at `self`, assuming both subtrees satisfy it and differ in
    /// height by at most two. Returns the root of the rebalanced subtree.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        let left_height = link_height(&self.left);
        let right_height = link_height(&self.right);

        if left_height - right_height > ALLOWED_IMBALANCE {
            let outer_is_taller = self
                .left()
                .map_or(true, |l| link_height(&l.left) >= link_height(&l.right));
            self = if outer_is_taller {
                self.rotate_right()
            } else {
                self.rotate_left_right()
            };
        } else if right_height - left_height > ALLOWED_IMBALANCE {
            let outer_is_taller = self
                .right()
                .map_or(true, |r| link_height(&r.right) >= link_height(&r.left));
            self = if outer_is_taller {
                self.rotate_left()
            } else {
                self.rotate_right_left()
            };
        }
        self.fix_height();

        if cfg!(debug_assertions) {
            let left_height = link_height(&self.left);
            let right_height = link_height(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!((left_height - right_height).abs() <= ALLOWED_IMBALANCE);
        }
        self
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. Without a left
    /// child there is nothing to rotate and `self` comes back unchanged.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///       /     \                /     \
    ///   new_root   z   rotate ->  x    old_root
    ///    /  \                           /  \
    ///   x    y                         y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.take_left() {
            Some(left) => left,
            None => return self,
        };
        trace!("rotating AVL node right");

        self.set_left(new_root.take_right());
        self.fix_height();

        new_root.set_right(Some(self));
        new_root.fix_height();
        new_root
    }

    /// The mirror image of [`Node::rotate_right`]: the right child moves up and its left subtree
    /// becomes the old root's right subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.take_right() {
            Some(right) => right,
            None => return self,
        };
        trace!("rotating AVL node left");

        self.set_right(new_root.take_left());
        self.fix_height();

        new_root.set_left(Some(self));
        new_root.fix_height();
        new_root
    }

    /// Rotates the left child left and then self right. Used when the left child is too tall
    /// because of its right subtree.
    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        if let Some(left) = self.take_left() {
            self.set_left(Some(left.rotate_left()));
        }
        self.rotate_right()
    }

    /// Rotates the right child right and then self left.
    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        if let Some(right) = self.take_right() {
            self.set_right(Some(right.rotate_right()));
        }
        self.rotate_left()
    }
}
