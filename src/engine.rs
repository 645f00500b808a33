use log::{debug, info};

use crate::decoder::decode_data;
use crate::encoder::{DEFAULT_SYMBOL_WIDTH, EncodeReport, encode_data};
use crate::error::Result;
use crate::frequency::{DEFAULT_MAX_SYMBOLS, FreqTable, Symbol};
use crate::huffman::{CodeTable, HuffmanTree, build_huffman_tree, generate_code_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Most distinct symbols the frequency table accepts.
    pub max_symbols: usize,
    /// Bits per symbol assumed for the uncompressed text.
    pub symbol_width: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_symbols: DEFAULT_MAX_SYMBOLS,
            symbol_width: DEFAULT_SYMBOL_WIDTH,
        }
    }
}

impl EngineConfig {
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    pub fn with_symbol_width(mut self, symbol_width: u32) -> Self {
        self.symbol_width = symbol_width;
        self
    }
}

/// One row of the code listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeListing {
    pub symbol: Symbol,
    pub freq: u64,
    pub code: String,
}

/// Frequency table plus the tree and codes last calculated from it.
///
/// The tree and code table are only refreshed by [`HuffmanEngine::calculate`];
/// after `add`, call it again before encoding. Every method either succeeds
/// or leaves the engine untouched.
///
/// Not synchronized. Share it between threads behind a `Mutex`.
#[derive(Debug, Clone)]
pub struct HuffmanEngine {
    config: EngineConfig,
    frequencies: FreqTable,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
}

impl Default for HuffmanEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl HuffmanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        HuffmanEngine {
            config,
            frequencies: FreqTable::with_limit(config.max_symbols),
            tree: None,
            codes: CodeTable::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn add(&mut self, symbol: Symbol, freq: u64) -> Result<()> {
        self.frequencies.upsert(symbol, freq)
    }

    pub fn calculate(&mut self) -> Result<()> {
        let tree = build_huffman_tree(&self.frequencies)?;
        let codes = generate_code_table(&tree);
        info!(
            "Calculated {} codes, longest is {} bits.",
            codes.len(),
            tree.depth()
        );
        self.tree = Some(tree);
        self.codes = codes;
        Ok(())
    }

    /// Codes in code-table order, each with its current frequency.
    pub fn list_codes(&self) -> Vec<CodeListing> {
        self.codes
            .iter()
            .map(|entry| CodeListing {
                symbol: entry.symbol,
                freq: self.frequencies.get(entry.symbol).unwrap_or(0),
                code: entry.code.clone(),
            })
            .collect()
    }

    pub fn encode(&self, text: &str) -> Result<EncodeReport> {
        encode_data(text, &self.codes, self.config.symbol_width)
    }

    /// Decodes against a tree rebuilt from the current frequencies, not the
    /// one kept by the last `calculate`.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let tree = build_huffman_tree(&self.frequencies)?;
        decode_data(bits, &tree)
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} frequency entries.", self.frequencies.len());
        self.frequencies.clear();
        self.tree = None;
        self.codes = CodeTable::new();
        info!("Engine cleared.");
    }

    pub fn frequencies(&self) -> &FreqTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }
}
