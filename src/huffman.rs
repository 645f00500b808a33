use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::{FreqTable, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn merge(left: Node, right: Node) -> Result<Node> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(HuffmanError::FrequencyOverflow)?;
        Ok(Node::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

pub type HuffmanTree = Node;

/// Positions of the two lowest-frequency nodes.
///
/// On equal frequencies the node seen first wins, for both picks.
fn two_smallest(nodes: &[Node]) -> (usize, usize) {
    let mut min1: Option<usize> = None;
    let mut min2: Option<usize> = None;

    for (i, node) in nodes.iter().enumerate() {
        let freq = node.freq();
        match min1 {
            Some(m) if freq >= nodes[m].freq() => {
                if min2.is_none_or(|m2| freq < nodes[m2].freq()) {
                    min2 = Some(i);
                }
            }
            _ => {
                min2 = min1;
                min1 = Some(i);
            }
        }
    }

    // callers guarantee at least two nodes
    (min1.unwrap_or(0), min2.unwrap_or(1))
}

/// Builds the Huffman tree with the quadratic greedy scan.
///
/// Leaves start in table order. Each round merges the two smallest nodes
/// (first minimum on the left); the merged node takes the first minimum's
/// slot and the last node fills the second minimum's slot.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    let mut nodes: Vec<Node> = frequencies
        .iter()
        .map(|e| Node::Leaf {
            symbol: e.symbol,
            freq: e.freq,
        })
        .collect();

    if nodes.is_empty() {
        return Err(HuffmanError::EmptyAlphabet);
    }

    while nodes.len() > 1 {
        let (min1, min2) = two_smallest(&nodes);
        let last = nodes.len() - 1;
        trace!(
            "Merging slot {} (freq {}) with slot {} (freq {})",
            min1,
            nodes[min1].freq(),
            min2,
            nodes[min2].freq()
        );

        let right = nodes.swap_remove(min2);
        // if the first minimum sat in the last slot, swap_remove just moved it
        let slot = if min1 == last { min2 } else { min1 };
        let left = nodes.remove(slot);
        nodes.insert(slot, Node::merge(left, right)?);
    }

    debug!("Tree construction complete.");
    nodes.pop().ok_or(HuffmanError::EmptyAlphabet)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: Symbol,
    pub code: String,
}

/// Symbol codes in depth-first order, '0' for left and '1' for right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: HashMap<Symbol, usize>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, symbol: Symbol, code: String) {
        self.index.insert(symbol, self.entries.len());
        self.entries.push(CodeEntry { symbol, code });
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.index
            .get(&symbol)
            .map(|&i| self.entries[i].code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn generate_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::new();
    build_code_table(tree, String::new(), &mut table);
    debug!("Code table built with {} entries.", table.len());
    table
}

fn build_code_table(node: &Node, prefix: String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            build_code_table(left, format!("{}0", prefix), table);
            build_code_table(right, format!("{}1", prefix), table);
        }
    }
}
