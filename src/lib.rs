//! Huffman coding over an explicit frequency table.
//!
//! Frequencies are set per symbol, the tree and code table are rebuilt on
//! request, and text is encoded to / decoded from strings of `'0'` and `'1'`.
//!
//! ```
//! use huffman_engine::HuffmanEngine;
//!
//! let mut engine = HuffmanEngine::new();
//! for (symbol, freq) in [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)] {
//!     engine.add(symbol, freq)?;
//! }
//! engine.calculate()?;
//!
//! let report = engine.encode("abf")?;
//! assert_eq!(report.bits, "110011010");
//! assert_eq!(engine.decode(&report.bits)?, "abf");
//! # Ok::<(), huffman_engine::HuffmanError>(())
//! ```

pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod huffman;

pub use encoder::EncodeReport;
pub use engine::{CodeListing, EngineConfig, HuffmanEngine};
pub use error::{HuffmanError, Result};
pub use frequency::{FreqEntry, FreqTable, Symbol};
pub use huffman::{CodeEntry, CodeTable, HuffmanTree, Node};
