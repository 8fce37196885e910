//! Sorted iteration over a subtree.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::Node;

/// A lazy in-order walk over the keys of a tree, yielding them in ascending order.
///
/// The walk keeps the path of nodes whose left subtrees are being visited on a stack so it never
/// recurses, however tall the tree is.
pub struct Iter<'a, K, H = ()> {
    stack: Vec<&'a Node<K, H>>,
}

impl<'a, K, H> Iter<'a, K, H> {
    pub(crate) fn new(root: Option<&'a Node<K, H>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants. The top of the stack is then the smallest
    /// key not yet visited.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, H>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<K, H> Clone for Iter<'_, K, H> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, H> Iterator for Iter<'a, K, H> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<K, H> FusedIterator for Iter<'_, K, H> {}

/// Writes the keys one per line in sorted order, or `Empty tree` when there are none.
pub(crate) fn display_sorted<K, H>(mut keys: Iter<'_, K, H>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: fmt::Display,
{
    let Some(first) = keys.next() else {
        return write!(f, "Empty tree");
    };
    write!(f, "{}", first)?;
    for key in keys {
        write!(f, "\n{}", key)?;
    }
    Ok(())
}
