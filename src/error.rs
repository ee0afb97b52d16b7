//! Error types for the coding pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the pipeline stages.
///
/// None of these are transient: the stage that detects one stops and the
/// error goes straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbols were supplied, so there is nothing to build a tree from.
    #[error("empty input: at least one symbol is required")]
    EmptyInput,

    /// Extraction from an empty priority queue.
    #[error("priority queue underflow")]
    QueueUnderflow,

    /// The encoder met a symbol that has no code.
    #[error("unknown symbol {symbol}: no code in the table")]
    UnknownSymbol { symbol: String },

    /// The bit sequence ended in the middle of a code.
    #[error("truncated bit sequence: {pending} dangling bits after {consumed} bits")]
    TruncatedBitSequence { consumed: usize, pending: usize },

    /// A bit led to no code at all.
    #[error("invalid code at bit {position}")]
    InvalidCode { position: usize },

    /// A character other than `0` or `1` in a bit string.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },

    /// Packed bytes hold fewer bits than the stated length.
    #[error("invalid bit length {len}: only {capacity} bits available")]
    InvalidBitLength { len: usize, capacity: usize },
}

impl Error {
    /// Create an unknown symbol error from any printable symbol.
    pub fn unknown_symbol(symbol: impl core::fmt::Debug) -> Self {
        Error::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::unknown_symbol('z').to_string(),
            "unknown symbol 'z': no code in the table"
        );
        assert_eq!(
            Error::TruncatedBitSequence {
                consumed: 5,
                pending: 2
            }
            .to_string(),
            "truncated bit sequence: 2 dangling bits after 5 bits"
        );
        assert_eq!(
            Error::InvalidBit {
                found: 'x',
                position: 3
            }
            .to_string(),
            "invalid bit 'x' at position 3"
        );
    }
}
