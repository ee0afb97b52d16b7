use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::heap::MinHeap;
use crate::symbol::Symbol;

/// A node of a Huffman tree.
///
/// Every internal node owns exactly two children and weighs as much as both
/// of them together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new internal node, `left` on the 0 side.
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn path_length(&self, depth: u64) -> u64 {
        match self {
            Node::Leaf { weight, .. } => weight * depth,
            Node::Internal { left, right, .. } => {
                left.path_length(depth + 1) + right.path_length(depth + 1)
            }
        }
    }
}

/// Heap entry: a candidate subtree keyed by weight, then creation order.
struct Candidate<S> {
    order: usize,
    node: Node<S>,
}

impl<S> Candidate<S> {
    fn key(&self) -> (u64, usize) {
        (self.node.weight(), self.order)
    }
}

impl<S> PartialEq for Candidate<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Candidate<S> {}

impl<S> PartialOrd for Candidate<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Candidate<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Huffman tree built from a frequency table.
///
/// A table with a single symbol yields a tree that is just one leaf. The
/// code table and the decoder both handle that case by giving the symbol
/// the one-bit code `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Repeatedly merge the two lightest subtrees until one remains.
    ///
    /// Equal weights are taken in creation order: leaves first, by ascending
    /// symbol, then merged nodes in the order they were made. The first node
    /// extracted becomes the left child.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let leaves: Vec<Candidate<S>> = frequencies
            .iter()
            .enumerate()
            .map(|(order, (symbol, weight))| Candidate {
                order,
                node: Node::leaf(symbol, weight),
            })
            .collect();
        let mut next_order = leaves.len();
        let mut heap = MinHeap::build(leaves);

        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            trace!(
                "merge {} + {} (orders {} and {})",
                left.node.weight(),
                right.node.weight(),
                left.order,
                right.order
            );
            heap.insert(Candidate {
                order: next_order,
                node: Node::merge(left.node, right.node),
            });
            next_order += 1;
        }

        let root = heap.extract_min()?.node;
        let tree = HuffmanTree { root };
        debug!(
            "huffman tree: {} leaves, height {}, weight {}",
            tree.leaf_count(),
            tree.height(),
            tree.weight()
        );
        Ok(tree)
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight, equal to the input length.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Depth of the deepest leaf. Zero for a single-symbol tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn is_single_symbol(&self) -> bool {
        self.root.is_leaf()
    }

    /// Sum over leaves of weight times depth, i.e. the encoded bit count.
    ///
    /// The lone leaf of a single-symbol tree counts as depth one, matching
    /// its one-bit code.
    pub fn weighted_path_length(&self) -> u64 {
        match &self.root {
            Node::Leaf { weight, .. } => *weight,
            root => root.path_length(0),
        }
    }
}

impl<S: fmt::Debug> HuffmanTree<S> {
    fn fmt_node(
        node: &Node<S>,
        depth: usize,
        label: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            Node::Leaf { symbol, weight } => {
                writeln!(
                    f,
                    "{}{}-> Leaf: {:?} [weight: {}]",
                    indent, label, symbol, weight
                )
            }
            Node::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, weight)?;
                Self::fmt_node(left, depth + 1, "0", f)?;
                Self::fmt_node(right, depth + 1, "1", f)
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(&self.root, 0, "root", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(text: &str) -> HuffmanTree<char> {
        let table = FrequencyTable::from_symbols(text.chars()).unwrap();
        HuffmanTree::from_frequencies(&table).unwrap()
    }

    fn check_weights(node: &Node<char>) {
        if let Node::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            check_weights(left);
            check_weights(right);
        }
    }

    #[test]
    fn merges_two_lightest_first() {
        let tree = tree_of("aabbbcc");
        let expected = Node::merge(
            Node::leaf('b', 3),
            Node::merge(Node::leaf('a', 2), Node::leaf('c', 2)),
        );
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.weight(), 7);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.weighted_path_length(), 11);
    }

    #[test]
    fn ties_resolve_in_creation_order() {
        // All four leaves weigh 1: a+b are merged first, then c+d, and the
        // older (a, b) subtree lands on the left.
        let tree = tree_of("dcba");
        let expected = Node::merge(
            Node::merge(Node::leaf('a', 1), Node::leaf('b', 1)),
            Node::merge(Node::leaf('c', 1), Node::leaf('d', 1)),
        );
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn leaf_beats_newer_internal_of_equal_weight() {
        // After a+b (weight 2), the leaf c (weight 2) is older and is
        // extracted first.
        let tree = tree_of("abcc");
        let expected = Node::merge(
            Node::leaf('c', 2),
            Node::merge(Node::leaf('a', 1), Node::leaf('b', 1)),
        );
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn weights_are_conserved() {
        let tree = tree_of("the quick brown fox jumps over the lazy dog");
        check_weights(tree.root());
        assert_eq!(tree.weight(), 43);
        assert_eq!(tree.leaf_count(), 27);
    }

    #[test]
    fn single_symbol_is_a_lone_leaf() {
        let tree = tree_of("aaaa");
        assert!(tree.is_single_symbol());
        assert_eq!(tree.root(), &Node::leaf('a', 4));
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.weighted_path_length(), 4);
    }

    #[test]
    fn display_shows_structure() {
        let tree = tree_of("aab");
        let rendered = tree.to_string();
        assert_eq!(
            rendered,
            "root-> Internal [weight: 3]\n  0-> Leaf: 'b' [weight: 1]\n  1-> Leaf: 'a' [weight: 2]\n"
        );
    }
}
