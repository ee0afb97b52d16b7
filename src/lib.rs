//! Static Huffman coding.
//!
//! The pipeline runs in five stages, each in its own module:
//!
//! - [`frequency`]: count every distinct symbol of the input.
//! - [`tree`]: merge the two lightest nodes until one root remains, using the
//!   min-heap from [`heap`].
//! - [`code_table`]: walk the tree and give every leaf its path as a code.
//! - [`encoder`]: concatenate the codes of the input symbols.
//! - [`decoder`]: walk the tree bit by bit to recover the symbols.
//!
//! [`Huffman`] ties the stages together:
//!
//! ```
//! use huffcode::Huffman;
//!
//! let huffman = Huffman::from_text("aabbbcc")?;
//! let encoded = huffman.encode_text("aabbbcc")?;
//! assert_eq!(encoded.to_string(), "10100001111");
//! assert_eq!(huffman.decode_text(&encoded)?, "aabbbcc");
//! # Ok::<(), huffcode::Error>(())
//! ```

pub mod bits;
pub mod code_table;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod symbol;
pub mod tree;

pub use bits::BitSequence;
pub use code_table::CodeTable;
pub use codec::Huffman;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use symbol::Symbol;
pub use tree::{HuffmanTree, Node};
