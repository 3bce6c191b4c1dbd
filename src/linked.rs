//! A mutable, pointer-linked BST. Every node exclusively owns its children through a `Box`, so
//! there are no parent pointers and no `unsafe`. Operations that need to change a parent's child
//! slot walk down holding a mutable borrow of the slot itself rather than of the parent.
//!
//! The tree never rebalances itself. [`Tree::rebalance`] rebuilds it to minimum height on request.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Equal items are kept, not merged.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::{debug, log_enabled, trace, Level};

use crate::error::{Error, Result};
use crate::iter::{Inorder, IntoIter, Iter};

/// A child slot. `None` is the empty spot at the bottom of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An ordered collection of items stored in an unbalanced Binary Search Tree. This can be used
/// for adding, finding, and removing items as well as for ordered queries like
/// [`successor`][Tree::successor] and [`range_find`][Tree::range_find].
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of items stored, counting each equal item separately.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.find(&3), None);
    /// ```
    pub fn clear(&mut self) {
        if self.root.is_some() {
            trace!("clear: dropping {} items", self.len);
        }
        // Dropping the iterator drains it node by node instead of recursing through `Box`es.
        drop(IntoIter::new(self.root.take(), self.len));
        self.len = 0;
    }

    /// The number of edges on the longest path from the root down to a leaf. A tree holding a
    /// single item has a height of 0 and an empty tree has a height of -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([5, 3, 8, 1, 4].iter().copied());
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, isize)> =
            self.root().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Whether the tree is reasonably close to the height of a perfectly balanced tree of the
    /// same size, i.e. `height < 2 * lg(len + 1) - 1`.
    ///
    /// This compares the overall height against the number of items and says nothing about the
    /// shape of any particular subtree. An empty tree is not considered balanced.
    pub fn is_balanced(&self) -> bool {
        let bound = 2.0 * ((self.len + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }

    /// Rebuilds the tree into the minimum possible height, `ceil(lg(len + 1)) - 1`, keeping
    /// every item.
    ///
    /// The items are drained in ascending order and the middle one becomes the new root, with
    /// each half built the same way below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        trace!("rebalance: rebuilding {} items", self.len);
        let mut sorted = IntoIter::new(self.root.take(), self.len);
        self.root = Node::build_balanced(&mut sorted, self.len);

        if log_enabled!(Level::Trace) {
            trace!("rebalance: height is now {}", self.height());
        }
    }

    /// A lazy preorder iterator over the items: each item comes before the items of its left
    /// subtree, which come before the items of its right subtree.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// A lazy iterator over the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].iter().copied().collect();
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root(), self.len)
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Tree<T> {
    /// Adds an item to the tree. An item equal to one already stored is kept as well and lands
    /// in the right subtree of the first equal item on its way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.add("b");
    /// tree.add("a");
    /// tree.add("b");
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), ["a", "b", "b"]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Potentially finds the stored item equal to `item`. If no item matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match item.cmp(&node.item) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(&node.item),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes an item equal to `item` and returns the stored item. When several equal items are
    /// stored, the one closest to the root goes.
    ///
    /// # Errors
    ///
    /// [`Error::ItemNotFound`] when no stored item equals `item`. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{linked::Tree, Error};
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::ItemNotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T> {
        let slot = search_slot(&mut self.root, item);
        let node = match slot.take() {
            Some(node) => node,
            None => {
                debug!("remove: no match among {} items", self.len);
                return Err(Error::ItemNotFound);
            }
        };

        let (removed, replacement) = node.unlink();
        *slot = replacement;
        self.len -= 1;

        Ok(removed)
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old one, or
    /// returns `None` if there is no such item.
    ///
    /// The node stays where it is, so `new_item` must order the same way against its neighbours
    /// as the item it replaces. Nothing checks this.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = [(1, 'a'), (2, 'b')].iter().copied().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'b'), (2, 'c')), Some((2, 'b')));
    /// assert_eq!(tree.replace(&(3, 'z'), (3, 'y')), None);
    /// assert_eq!(tree.find(&(2, 'c')), Some(&(2, 'c')));
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let node = search_slot(&mut self.root, item).as_deref_mut()?;
        Some(mem::replace(&mut node.item, new_item))
    }

    /// The smallest stored item strictly greater than `item`, whether or not `item` itself is
    /// stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [1, 3, 4, 5, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&6), Some(&8));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.item > *item {
                best = Some(&node.item);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        best
    }

    /// The largest stored item strictly less than `item`, whether or not `item` itself is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [1, 3, 4, 5, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&2), Some(&1));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut current = self.root();
        while let Some(node) = current {
            if node.item < *item {
                best = Some(&node.item);
                current = node.right();
            } else {
                current = node.left();
            }
        }

        best
    }

    /// Every stored item within `low..=high`, in ascending order. Bounds with `low > high` give
    /// an empty `Vec`.
    ///
    /// Subtrees that lie entirely outside the bounds are never visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [1, 3, 4, 5, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &5), [&3, &4, &5]);
    /// assert!(tree.range_find(&5, &3).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                // A left subtree only holds items <= its parent's.
                current = if node.item >= *low { node.left() } else { None };
            }

            let node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            if *low <= node.item && node.item <= *high {
                found.push(&node.item);
            }
            // A right subtree only holds items >= its parent's.
            current = if node.item <= *high {
                node.right()
            } else {
                None
            };
        }

        found
    }
}

/// Follows the search path for `item` down from `slot`. Returns the slot holding the first node
/// whose item equals `item`, or the empty slot the search fell off at.
fn search_slot<'a, T: Ord>(mut slot: &'a mut Link<T>, item: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => item.cmp(&node.item),
            None => return slot,
        };
        if ordering == Ordering::Equal {
            return slot;
        }

        slot = match slot {
            Some(node) => {
                if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                }
            }
            None => unreachable!(),
        };
    }
}

impl<T: Clone> Clone for Tree<T> {
    /// Copies the tree node for node, so the clone has the same shape. Subtrees are built bottom
    /// up from an explicit stack.
    fn clone(&self) -> Self {
        enum Step<'a, T> {
            Enter(Option<&'a Node<T>>),
            Build(&'a Node<T>),
        }

        let mut steps = vec![Step::Enter(self.root())];
        let mut built: Vec<Link<T>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(None) => built.push(None),
                Step::Enter(Some(node)) => {
                    steps.push(Step::Build(node));
                    steps.push(Step::Enter(node.right()));
                    steps.push(Step::Enter(node.left()));
                }
                Step::Build(node) => {
                    // The left subtree was entered first so its copy sits below the right's.
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        item: node.item.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            len: self.len,
        }
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its items in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), mem::take(&mut self.len))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draws the tree rotated 90° counter-clockwise: one item per line, the right subtree above its
/// parent and the left subtree below, indented by one `"| "` per level.
///
/// ```
/// use linked_bst::linked::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
///
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut current = self.root().map(|root| (root, 0));
        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right().map(|right| (right, level + 1));
            }

            let (node, level) = match stack.pop() {
                Some(entry) => entry,
                None => return Ok(()),
            };
            writeln!(f, "{}{}", "| ".repeat(level), node.item)?;
            current = node.left().map(|left| (left, level + 1));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("items", &self.inorder().collect::<Vec<_>>())
            .finish()
    }
}

/// A `Node` stores one item and owns its (possibly empty) left and right subtrees.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Takes this node out of its subtree. Returns its item and the subtree that should take its
    /// place in the parent's slot.
    fn unlink(mut self: Box<Self>) -> (T, Link<T>) {
        if self.right.is_some() {
            if let Some(max) = Self::pop_max(&mut self.left) {
                // Two children: the largest item of the left subtree takes over this node and
                // the shape above it doesn't change.
                let removed = mem::replace(&mut self.item, max);
                return (removed, Some(self));
            }
        }

        // At most one child, which moves up into our place.
        let Node { item, left, right } = *self;
        (item, left.or(right))
    }

    /// Detaches the largest item in the subtree held by `slot`. That node has no right child so
    /// its left child (if any) is lifted into its slot. `None` if the subtree is empty.
    fn pop_max(mut slot: &mut Link<T>) -> Option<T> {
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            slot = match slot {
                Some(node) => &mut node.right,
                None => break,
            };
        }

        let max = slot.take()?;
        let Node { item, left, .. } = *max;
        *slot = left;

        Some(item)
    }

    /// Builds the minimum-height subtree holding the next `len` items of the ascending `items`.
    /// The middle item becomes the root, with the items before it on the left and the items after
    /// it on the right. Recursion depth is the height of the built subtree.
    fn build_balanced<I>(items: &mut I, len: usize) -> Link<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        let left = Self::build_balanced(items, mid);
        let item = items.next()?;
        let right = Self::build_balanced(items, len - mid - 1);

        Some(Box::new(Self { item, left, right }))
    }
}
