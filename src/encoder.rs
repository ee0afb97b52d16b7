use log::debug;

use crate::bits::BitSequence;
use crate::code_table::CodeTable;
use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// Replace every symbol by its code and concatenate the codes in order.
///
/// Fails with [`Error::UnknownSymbol`] on the first symbol the table has no
/// code for, which means the table was built from a different input.
pub fn encode<S, I>(symbols: I, codes: &CodeTable<S>) -> Result<BitSequence>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut encoded = BitSequence::new();
    let mut count = 0usize;
    for symbol in symbols {
        let code = codes
            .get(&symbol)
            .ok_or_else(|| Error::unknown_symbol(symbol))?;
        encoded.append(code);
        count += 1;
    }
    debug!("encoded {} symbols into {} bits", count, encoded.len());
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn codes_of(text: &str) -> CodeTable<char> {
        let frequencies = FrequencyTable::from_symbols(text.chars()).unwrap();
        CodeTable::from_tree(&HuffmanTree::from_frequencies(&frequencies).unwrap())
    }

    #[test]
    fn concatenates_codes() {
        let codes = codes_of("aabbbcc");
        let encoded = encode("aabbbcc".chars(), &codes).unwrap();
        assert_eq!(encoded.to_string(), "10100001111");
        assert_eq!(encoded.len(), 11);
    }

    #[test]
    fn single_symbol_repeats_zero() {
        let codes = codes_of("aaaa");
        assert_eq!(encode("aaaa".chars(), &codes).unwrap().to_string(), "0000");
        assert_eq!(encode("a".chars(), &codes).unwrap().to_string(), "0");
    }

    #[test]
    fn empty_sequence_encodes_to_nothing() {
        let codes = codes_of("abc");
        assert!(encode("".chars(), &codes).unwrap().is_empty());
    }

    #[test]
    fn unknown_symbol_fails() {
        let codes = codes_of("abc");
        assert_eq!(
            encode("abd".chars(), &codes),
            Err(Error::UnknownSymbol {
                symbol: "'d'".to_string()
            })
        );
    }
}
