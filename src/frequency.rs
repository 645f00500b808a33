use log::{debug, trace, warn};

use crate::error::{HuffmanError, Result};

pub type Symbol = char;

pub const DEFAULT_MAX_SYMBOLS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqEntry {
    pub symbol: Symbol,
    pub freq: u64,
}

/// Symbol frequencies in insertion order.
///
/// Order matters: it decides leaf order in the tree builder and therefore
/// which of several equal-frequency nodes gets merged first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    entries: Vec<FreqEntry>,
    limit: usize,
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_SYMBOLS)
    }
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        FreqTable {
            entries: Vec::new(),
            limit,
        }
    }

    /// Counts every symbol of `text`, keeping first-seen order.
    ///
    /// Fails if `text` holds more distinct symbols than the default limit.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_text_with_limit(text, DEFAULT_MAX_SYMBOLS)
    }

    pub fn from_text_with_limit(text: &str, limit: usize) -> Result<Self> {
        let mut table = Self::with_limit(limit);
        for symbol in text.chars() {
            let freq = table.get(symbol).unwrap_or(0) + 1;
            table.upsert(symbol, freq)?;
        }
        debug!(
            "Counted {} symbols into {} table entries.",
            text.chars().count(),
            table.len()
        );
        Ok(table)
    }

    /// Sets the frequency of `symbol`, replacing any previous value.
    pub fn upsert(&mut self, symbol: Symbol, freq: u64) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.symbol == symbol) {
            trace!("Overwriting {:?}: {} -> {}", symbol, entry.freq, freq);
            entry.freq = freq;
            return Ok(());
        }

        if self.entries.len() >= self.limit {
            warn!(
                "Cannot add {:?}: table already holds {} symbols",
                symbol, self.limit
            );
            return Err(HuffmanError::CapacityExceeded { limit: self.limit });
        }

        trace!("Adding {:?} with frequency {}", symbol, freq);
        self.entries.push(FreqEntry { symbol, freq });
        Ok(())
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.freq)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &FreqEntry> {
        self.entries.iter()
    }

    /// Shannon entropy of the distribution, in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total: u64 = self.entries.iter().map(|e| e.freq).sum();
        if total == 0 {
            return 0.0;
        }
        let total_f = total as f64;

        let entropy: f64 = self
            .entries
            .iter()
            .filter(|e| e.freq > 0)
            .map(|e| {
                let p = e.freq as f64 / total_f;
                -p * p.log2()
            })
            .sum();

        debug!(
            "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
            entropy, total
        );
        entropy
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn upsert_overwrites_in_place() {
        let mut table = FreqTable::new();
        table.upsert('a', 3).unwrap();
        table.upsert('b', 1).unwrap();
        table.upsert('a', 7).unwrap();

        let entries: Vec<_> = table.iter().map(|e| (e.symbol, e.freq)).collect();
        assert_eq!(entries, vec![('a', 7), ('b', 1)]);
    }

    #[test]
    fn full_table_rejects_new_symbols_only() {
        let mut table = FreqTable::with_limit(2);
        table.upsert('a', 1).unwrap();
        table.upsert('b', 2).unwrap();

        assert_eq!(
            table.upsert('c', 3),
            Err(HuffmanError::CapacityExceeded { limit: 2 })
        );
        // existing symbols can still be updated
        table.upsert('b', 5).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('b'), Some(5));
        assert_eq!(table.get('c'), None);
    }

    #[test]
    fn from_text_counts_in_first_seen_order() {
        let table = FreqTable::from_text("banana").unwrap();
        let entries: Vec<_> = table.iter().map(|e| (e.symbol, e.freq)).collect();
        assert_eq!(entries, vec![('b', 1), ('a', 3), ('n', 2)]);
    }

    #[test]
    fn entropy_of_uniform_and_degenerate_tables() {
        let mut table = FreqTable::new();
        assert_eq!(table.entropy(), 0.0);

        for symbol in ['a', 'b', 'c', 'd'] {
            table.upsert(symbol, 10).unwrap();
        }
        assert!((table.entropy() - 2.0).abs() < 1e-12);

        let single = FreqTable::from_text("xxxx").unwrap();
        assert_eq!(single.entropy(), 0.0);
    }
}
