use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    #[error("alphabet is full: at most {limit} distinct symbols")]
    CapacityExceeded { limit: usize },

    #[error("frequency table is empty, nothing to build a tree from")]
    EmptyAlphabet,

    #[error("symbol {symbol:?} at position {position} has no code")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("invalid bit {digit:?} at position {position}, expected '0' or '1'")]
    InvalidBit { digit: char, position: usize },

    #[error("bit sequence ends in the middle of a code after {consumed} bits")]
    MalformedEncoding { consumed: usize },

    /// Sum of two subtree frequencies does not fit in a `u64`.
    #[error("frequency sum overflows u64")]
    FrequencyOverflow,
}
