//! An ordered container backed by a plain (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item
//! and owns up to two child `Node`s. The invariants this crate keeps are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold items that
//!    are not greater than its own item.
//! 2. For every `Node`, all the `Node`s in its right subtree hold items that
//!    are not less than its own item.
//!
//! Equal items are allowed. A new item equal to an existing one is routed into
//! the existing node's right subtree.
//!
//! Searching takes `O(height)`. The tree does not balance itself as it is
//! mutated: inserting sorted input produces a chain with a height of `N - 1`.
//! Calling [`Tree::rebalance`] rebuilds it into the minimum possible height,
//! `ceil(lg(N + 1)) - 1`.
//!
//! Every traversal in this crate walks the tree with an explicit stack, so a
//! degenerate tree of any size can be searched, iterated, measured, and dropped
//! without exhausting the call stack.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4].iter().copied().collect();
//!
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.height(), 2);
//!
//! assert_eq!(tree.successor(&4), Some(&5));
//! assert_eq!(tree.predecessor(&4), Some(&3));
//! assert_eq!(tree.range_find(&3, &5), [&3, &4, &5]);
//!
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.remove(&99), Err(Error::ItemNotFound));
//! assert_eq!(tree.len(), 4);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod linked;

pub use error::{Error, Result};
pub use linked::Tree;
