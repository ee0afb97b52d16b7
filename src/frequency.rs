use std::collections::BTreeMap;

use log::debug;

use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// Occurrence count of every distinct symbol of an input.
///
/// Built once and never modified. Keys are kept in ascending symbol order,
/// every count is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the symbols of `symbols` in a single pass.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts: BTreeMap<S, u64> = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        Self::from_map(counts)
    }

    /// Build from precomputed `(symbol, count)` pairs.
    ///
    /// Repeated symbols are summed and zero counts are dropped.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut counts: BTreeMap<S, u64> = BTreeMap::new();
        for (symbol, count) in pairs.into_iter().filter(|&(_, count)| count > 0) {
            *counts.entry(symbol).or_default() += count;
        }
        Self::from_map(counts)
    }

    fn from_map(counts: BTreeMap<S, u64>) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::EmptyInput);
        }
        let total = counts.values().sum();
        debug!(
            "frequency table: {} distinct symbols, {} total",
            counts.len(),
            total
        );
        Ok(Self { counts, total })
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
