//! Binary trees.
//!
//! [`BinaryTree`] is a plain tree built by hand from [`TreeNode`]s and walked
//! in the four classic orders.  [`BinarySearchTree`] keeps its values ordered.

mod search_tree;

use std::collections::VecDeque;

pub use search_tree::BinarySearchTree;

/// A tree node owning its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    value: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf.
    pub fn new(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Replaces the left subtree.
    pub fn with_left(mut self, left: TreeNode<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree.
    pub fn with_right(mut self, right: TreeNode<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    fn pre_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.push(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(out);
        }
        if let Some(right) = self.right() {
            right.pre_order(out);
        }
    }

    fn in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.in_order(out);
        }
        out.push(&self.value);
        if let Some(right) = self.right() {
            right.in_order(out);
        }
    }

    fn post_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.post_order(out);
        }
        if let Some(right) = self.right() {
            right.post_order(out);
        }
        out.push(&self.value);
    }
}

/// A binary tree with a root value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: TreeNode<T>,
}

impl<T> BinaryTree<T> {
    pub fn new(root: TreeNode<T>) -> Self {
        BinaryTree { root }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// Node, then left subtree, then right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.pre_order(&mut out);
        out
    }

    /// Left subtree, then node, then right subtree.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.in_order(&mut out);
        out
    }

    /// Left subtree, then right subtree, then node.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.post_order(&mut out);
        out
    }

    /// Level by level from the root, left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([&self.root]);
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            out.push(&node.value);
        }
        out
    }
}
