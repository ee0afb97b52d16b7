use crate::bits::BitSequence;
use crate::code_table::CodeTable;
use crate::decoder;
use crate::encoder;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;

/// A Huffman tree together with its code table.
///
/// The tree stays alive for as long as the codec does, since both the code
/// table and the decoder are derived from it.
#[derive(Debug, Clone)]
pub struct Huffman<S> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> Huffman<S> {
    /// Count `input`, then build its tree and code table.
    pub fn from_symbols(input: &[S]) -> Result<Self> {
        let frequencies = FrequencyTable::from_symbols(input.iter().copied())?;
        Self::from_frequencies(&frequencies)
    }

    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let tree = HuffmanTree::from_frequencies(frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        Ok(Self { tree, codes })
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn encode(&self, input: &[S]) -> Result<BitSequence> {
        encoder::encode(input.iter().copied(), &self.codes)
    }

    pub fn decode(&self, bits: &BitSequence) -> Result<Vec<S>> {
        decoder::decode(bits, &self.tree)
    }
}

impl Huffman<char> {
    pub fn from_text(text: &str) -> Result<Self> {
        let frequencies = FrequencyTable::from_symbols(text.chars())?;
        Self::from_frequencies(&frequencies)
    }

    pub fn encode_text(&self, text: &str) -> Result<BitSequence> {
        encoder::encode(text.chars(), &self.codes)
    }

    pub fn decode_text(&self, bits: &BitSequence) -> Result<String> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}
