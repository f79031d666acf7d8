use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The bounded set of symbol ordinals `0..size` a codec session accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Alphabet {
    size: u16,
}

impl Alphabet {
    pub const ASCII: Alphabet = Alphabet { size: 128 };

    pub const BYTE: Alphabet = Alphabet { size: 256 };

    pub fn new(size: u16) -> Result<Self> {
        if !(2..=256).contains(&size) {
            return Err(Error::InvalidAlphabet { size });
        }

        Ok(Self { size })
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn contains(&self, symbol: u8) -> bool {
        u16::from(symbol) < self.size
    }

    /// The next ordinal after `symbol`, wrapping to the first one after the last.
    pub fn successor(&self, symbol: u8) -> u8 {
        // size <= 256, so the remainder always fits in a byte
        ((u16::from(symbol) + 1) % self.size) as u8
    }
}

impl TryFrom<u16> for Alphabet {
    type Error = Error;

    fn try_from(size: u16) -> Result<Self> {
        Self::new(size)
    }
}

impl From<Alphabet> for u16 {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.size
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ASCII
    }
}
