//! Error types for the codec.

use thiserror::Error;

/// Every failure the codec can report.
#[derive(Debug, Error)]
pub enum Error {
    /// A textual bit-string contained something other than '0' or '1'.
    #[error("invalid character {found:?} at position {position} in bit string")]
    InvalidInput { position: usize, found: char },

    /// Reading or writing the underlying resource failed.
    #[error("I/O error: {0}")]
    IoFailure(#[from] std::io::Error),

    /// No symbols were observed, so there is nothing to build a tree from.
    #[error("empty alphabet: input contains no symbols")]
    EmptyAlphabet,

    /// The bit stream ended (or led nowhere) before a leaf was reached.
    #[error("corrupted stream: no leaf reached at bit {position}")]
    CorruptedStream { position: usize },

    /// An input symbol lies outside the configured alphabet.
    #[error("symbol {symbol} outside alphabet of size {size}")]
    SymbolOutOfRange { symbol: u8, size: u16 },

    #[error("invalid alphabet size {size}: must be within 2..=256")]
    InvalidAlphabet { size: u16 },

    /// The tree builder needs at least two weighted entries.
    #[error("cannot build a tree from {found} weighted symbol(s)")]
    InsufficientSymbols { found: usize },

    /// A deserialized tree breaks the leaf/internal node invariants.
    #[error("malformed tree: {reason}")]
    MalformedTree { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
