use log::debug;

use crate::bits::BitSequence;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};

/// Walk `tree` from the root one bit at a time, emitting a symbol and going
/// back to the root at every leaf.
///
/// The bits must be a concatenation of whole codes. Running out of bits
/// away from the root is reported as [`Error::TruncatedBitSequence`].
pub fn decode<S: Symbol>(bits: &BitSequence, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = tree.root();
    let decoded = match root {
        Node::Leaf { symbol, .. } => decode_single(bits, *symbol)?,
        _ => {
            let mut decoded = Vec::new();
            let mut current = root;
            let mut pending = 0usize;

            for bit in bits {
                current = match current {
                    Node::Internal { left, right, .. } => {
                        if bit {
                            right.as_ref()
                        } else {
                            left.as_ref()
                        }
                    }
                    // The walk resets to the internal root on every leaf.
                    Node::Leaf { .. } => unreachable!("decoder state is never a leaf"),
                };
                pending += 1;

                if let Node::Leaf { symbol, .. } = current {
                    decoded.push(*symbol);
                    current = root;
                    pending = 0;
                }
            }

            if pending != 0 {
                return Err(Error::TruncatedBitSequence {
                    consumed: bits.len() - pending,
                    pending,
                });
            }
            decoded
        }
    };

    debug!("decoded {} bits into {} symbols", bits.len(), decoded.len());
    Ok(decoded)
}

/// A single-symbol tree has one code, `0`.
fn decode_single<S: Symbol>(bits: &BitSequence, symbol: S) -> Result<Vec<S>> {
    bits.iter()
        .enumerate()
        .map(|(position, bit)| {
            if bit {
                Err(Error::InvalidCode { position })
            } else {
                Ok(symbol)
            }
        })
        .collect()
}
