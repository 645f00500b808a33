use log::{debug, warn};

use crate::error::{HuffmanError, Result};
use crate::huffman::CodeTable;

/// Width the original text is assumed to occupy per symbol, in bits.
pub const DEFAULT_SYMBOL_WIDTH: u32 = 8;

/// Encoded bit string plus the figures needed for a compression report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    pub bits: String,
    pub symbol_count: usize,
    pub compressed_length: usize,
    pub original_length: usize,
}

impl EncodeReport {
    /// Compressed size as a percentage of the fixed-width original.
    pub fn compression_rate(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        100.0 * self.compressed_length as f64 / self.original_length as f64
    }

    /// Mean number of code digits spent per input symbol.
    pub fn average_code_length(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.compressed_length as f64 / self.symbol_count as f64
    }
}

pub fn encode_data(text: &str, code_table: &CodeTable, symbol_width: u32) -> Result<EncodeReport> {
    debug!("Starting data encoding...");
    let mut bits = String::new();
    let mut symbol_count = 0;

    for (position, symbol) in text.chars().enumerate() {
        match code_table.get(symbol) {
            Some(code) => bits.push_str(code),
            None => {
                warn!("Symbol {:?} found in text but not in code table", symbol);
                return Err(HuffmanError::UnknownSymbol { symbol, position });
            }
        }
        symbol_count += 1;
    }

    let report = EncodeReport {
        compressed_length: bits.len(),
        original_length: symbol_count * symbol_width as usize,
        symbol_count,
        bits,
    };
    debug!(
        "Encoded {} symbols into {} bits ({} bits uncompressed).",
        report.symbol_count, report.compressed_length, report.original_length
    );
    Ok(report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frequency::FreqTable;
    use crate::huffman::{build_huffman_tree, generate_code_table};

    fn classic_codes() -> CodeTable {
        let mut freq = FreqTable::new();
        for (s, f) in [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)] {
            freq.upsert(s, f).unwrap();
        }
        generate_code_table(&build_huffman_tree(&freq).unwrap())
    }

    #[test]
    fn concatenates_codes_in_text_order() {
        let report = encode_data("abf", &classic_codes(), DEFAULT_SYMBOL_WIDTH).unwrap();
        assert_eq!(report.bits, "110011010");
        assert_eq!(report.compressed_length, 9);
        assert_eq!(report.original_length, 24);
        assert!((report.compression_rate() - 37.5).abs() < 1e-9);
        assert!((report.average_code_length() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_symbol_is_rejected_with_position() {
        assert_eq!(
            encode_data("fazb", &classic_codes(), DEFAULT_SYMBOL_WIDTH),
            Err(HuffmanError::UnknownSymbol {
                symbol: 'z',
                position: 2
            })
        );
    }

    #[test]
    fn empty_text_reports_zero_rates() {
        let report = encode_data("", &classic_codes(), DEFAULT_SYMBOL_WIDTH).unwrap();
        assert!(report.bits.is_empty());
        assert_eq!(report.compression_rate(), 0.0);
        assert_eq!(report.average_code_length(), 0.0);
    }

    #[test]
    fn empty_code_table_knows_no_symbols() {
        assert!(matches!(
            encode_data("a", &CodeTable::new(), DEFAULT_SYMBOL_WIDTH),
            Err(HuffmanError::UnknownSymbol { symbol: 'a', .. })
        ));
    }
}
