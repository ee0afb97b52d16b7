use std::collections::BTreeMap;

use log::debug;

use crate::bits::BitSequence;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};

/// The code of every leaf symbol of one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, BitSequence>,
}

impl<S: Symbol> CodeTable<S> {
    /// Assign every leaf its root path, `0` for left and `1` for right.
    ///
    /// The lone leaf of a single-symbol tree gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                let mut code = BitSequence::new();
                code.push(false);
                codes.insert(*symbol, code);
            }
            root => {
                let mut path = BitSequence::with_capacity(tree.height());
                fill(root, &mut path, &mut codes);
            }
        }
        let table = CodeTable { codes };
        debug!(
            "code table: {} codes, longest {} bits",
            table.len(),
            table.max_code_len()
        );
        table
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSequence> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &BitSequence)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitSequence::len).max().unwrap_or(0)
    }

    /// True if no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitSequence> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }

    /// Number of bits needed to encode an input with these frequencies.
    ///
    /// `None` when a counted symbol has no code.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> Option<u64> {
        frequencies.iter().try_fold(0, |acc, (symbol, count)| {
            let code = self.codes.get(&symbol)?;
            Some(acc + count * code.len() as u64)
        })
    }
}

fn fill<S: Symbol>(
    node: &Node<S>,
    path: &mut BitSequence,
    codes: &mut BTreeMap<S, BitSequence>,
) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            fill(left, path, codes);
            path.pop();

            path.push(true);
            fill(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(text: &str) -> (FrequencyTable<char>, CodeTable<char>) {
        let frequencies = FrequencyTable::from_symbols(text.chars()).unwrap();
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        (frequencies, CodeTable::from_tree(&tree))
    }

    fn code(table: &CodeTable<char>, symbol: char) -> String {
        table.get(&symbol).unwrap().to_string()
    }

    #[test]
    fn assigns_root_paths() {
        let (frequencies, table) = table_of("aabbbcc");
        assert_eq!(table.len(), 3);
        assert_eq!(code(&table, 'b'), "0");
        assert_eq!(code(&table, 'a'), "10");
        assert_eq!(code(&table, 'c'), "11");
        assert_eq!(table.max_code_len(), 2);
        assert_eq!(table.encoded_len(&frequencies), Some(11));
        assert!(table.is_prefix_free());
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let (frequencies, table) = table_of("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code(&table, 'a'), "0");
        assert_eq!(table.encoded_len(&frequencies), Some(4));
    }

    #[test]
    fn prefix_freedom_on_larger_alphabet() {
        let (_, table) = table_of("abracadabra, a magic word of some renown");
        assert!(table.is_prefix_free());
        assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn detects_prefix_violation() {
        let mut codes: BTreeMap<char, BitSequence> = BTreeMap::new();
        codes.insert('a', "0".parse().unwrap());
        codes.insert('b', "01".parse().unwrap());
        let table = CodeTable { codes };
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn encoded_len_needs_every_symbol() {
        let (_, table) = table_of("ab");
        let other = FrequencyTable::from_symbols("abc".chars()).unwrap();
        assert_eq!(table.encoded_len(&other), None);
    }
}
