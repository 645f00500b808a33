use log::{debug, trace, warn};

use crate::error::{HuffmanError, Result};
use crate::huffman::{HuffmanTree, Node};

/// Walks `tree` once per digit of `bits`, emitting a symbol at every leaf.
///
/// A tree that is a single leaf has empty codes, so each digit stands for
/// one more copy of its symbol.
pub fn decode_data(bits: &str, tree: &HuffmanTree) -> Result<String> {
    debug!("Starting bit sequence decoding...");
    let mut result = String::new();
    let mut current = tree;
    let mut consumed = 0;

    for (position, digit) in bits.chars().enumerate() {
        let go_right = match digit {
            '0' => false,
            '1' => true,
            _ => {
                warn!("Invalid bit {:?} at position {}", digit, position);
                return Err(HuffmanError::InvalidBit { digit, position });
            }
        };
        consumed = position + 1;

        current = match current {
            Node::Leaf { symbol, .. } => {
                result.push(*symbol);
                continue;
            }
            Node::Internal { left, right, .. } => {
                if go_right {
                    &**right
                } else {
                    &**left
                }
            }
        };

        if let Node::Leaf { symbol, .. } = current {
            trace!("Decoded {:?} after bit {}", symbol, position);
            result.push(*symbol);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        warn!("Bit sequence truncated after {} bits", consumed);
        return Err(HuffmanError::MalformedEncoding { consumed });
    }

    debug!("Final decoded text size: {} symbols.", result.chars().count());
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;

    fn leaf(symbol: char, freq: u64) -> Box<Node> {
        Box::new(Node::Leaf { symbol, freq })
    }

    // a = 0, b = 10, c = 11
    fn small_tree() -> HuffmanTree {
        Node::Internal {
            freq: 6,
            left: leaf('a', 3),
            right: Box::new(Node::Internal {
                freq: 3,
                left: leaf('b', 1),
                right: leaf('c', 2),
            }),
        }
    }

    #[test]
    fn walks_to_each_leaf_and_restarts() {
        assert_eq!(decode_data("010110", &small_tree()).unwrap(), "abca");
        assert_eq!(decode_data("", &small_tree()).unwrap(), "");
    }

    #[test]
    fn rejects_non_binary_digits() {
        assert_eq!(
            decode_data("01x", &small_tree()),
            Err(HuffmanError::InvalidBit {
                digit: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn truncated_code_is_malformed() {
        assert_eq!(
            decode_data("01", &small_tree()),
            Err(HuffmanError::MalformedEncoding { consumed: 2 })
        );
    }

    #[test]
    fn lone_leaf_repeats_per_digit() {
        let tree = Node::Leaf {
            symbol: 'x',
            freq: 5,
        };
        assert_eq!(decode_data("", &tree).unwrap(), "");
        assert_eq!(decode_data("010", &tree).unwrap(), "xxx");
        assert!(matches!(
            decode_data("2", &tree),
            Err(HuffmanError::InvalidBit { digit: '2', .. })
        ));
    }
}
