use std::cmp::Ordering;

use crate::tree::TreeNode;

/// An unbalanced binary search tree holding distinct values.
///
/// Everything in a node's left subtree is smaller than the node and
/// everything in its right subtree is larger.  Insertion and lookup walk down
/// from the root iteratively.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<TreeNode<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Creates a tree holding only `value`.
    pub fn with_root(value: T) -> Self {
        BinarySearchTree {
            root: Some(Box::new(TreeNode::new(value))),
            len: 1,
        }
    }

    /// Inserts `value`, returning false if an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(TreeNode::new(value)));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root.as_deref() {
            root.in_order(&mut out);
        }
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn create_letter_tree() -> BinarySearchTree<&'static str> {
        ["E", "B", "A", "C", "M", "L", "Q"].into_iter().collect()
    }

    #[test]
    fn test_contains() {
        let tree = create_letter_tree();
        for letter in ["E", "B", "A", "C", "M", "L", "Q"] {
            assert!(tree.contains(&letter), "missing {letter}");
        }
        assert!(!tree.contains(&"H"));
        assert!(!tree.contains(&"Z"));
    }

    #[test]
    fn test_insert() {
        let mut tree = create_letter_tree();
        assert!(!tree.insert("E"));
        assert!(tree.insert("X"));
        assert!(tree.insert("S"));
        assert!(!tree.insert("A"));
        assert!(!tree.insert("B"));
        assert_eq!(tree.len(), 9);
        assert!(tree.contains(&"S"));
    }

    #[test]
    fn test_with_root() {
        let mut tree = BinarySearchTree::with_root(10);
        assert_eq!(tree.len(), 1);
        assert!(tree.insert(5));
        assert_eq!(tree.in_order(), vec![&5, &10]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::default();
        assert!(tree.is_empty());
        assert!(!tree.contains(&0));
        assert!(tree.in_order().is_empty());
    }

    #[quickcheck]
    fn prop_in_order_is_sorted_and_distinct(vals: Vec<i16>) -> bool {
        let tree: BinarySearchTree<i16> = vals.iter().copied().collect();
        let mut expected = vals.clone();
        expected.sort();
        expected.dedup();
        tree.len() == expected.len()
            && tree.in_order().into_iter().copied().eq(expected.into_iter())
    }
}
