//! Traversal cursors over a [`Tree`][crate::Tree].
//!
//! Both cursors keep their position in an explicit stack of borrowed nodes, holding at most
//! `height + 1` of them, and are lazy: each item is found when `next` is called.

use std::iter::FusedIterator;

use crate::linked::{Link, Node};

/// Preorder iterator over the items of a [`Tree`][crate::Tree]. A node is yielded before its
/// left subtree, which is yielded before its right subtree.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left child is popped next.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;

        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Iterator over the items of a [`Tree`][crate::Tree] in ascending order.
///
/// Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    /// Nodes whose left subtree has been, or is being, yielded but which haven't been yielded
    /// themselves. The top of the stack is the next node to yield.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut inorder = Self {
            stack: Vec::new(),
            remaining: len,
        };
        inorder.push_left_spine(root);
        inorder
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Clone for Inorder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;

        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Inorder<'a, T> {}
impl<'a, T> FusedIterator for Inorder<'a, T> {}

/// Owning iterator over the items of a [`Tree`][crate::Tree] in ascending order.
///
/// Nodes are taken apart as the iterator passes them, so dropping it part way through frees the
/// rest of the tree one node at a time rather than recursively.
///
/// Created by `Tree::into_iter`.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has already been detached, next to yield on top.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut into_iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        into_iter.push_left_spine(root);
        into_iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { item, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining = self.remaining.saturating_sub(1);

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
