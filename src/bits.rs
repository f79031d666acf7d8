//! Packing of bit sequences into bytes.
//!
//! A packed stream starts with `padding - 1` zero bits and a single one bit,
//! where `padding = 8 - len % 8` is always in `1..=8`. The one bit is the
//! sentinel after which the real data begins; bits are stored MSB-first.
//!
//! ```
//! use huffman_codec::bits::{pack_str, unpack, bits_to_string};
//!
//! let packed = pack_str("101").unwrap();
//! assert_eq!(packed, vec![0b0000_1101]);
//! assert_eq!(bits_to_string(&unpack(&packed)), "101");
//! ```

use crate::error::{Error, Result};
use bitvec::prelude::*;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Owned bit sequence, MSB-first over bytes.
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed bit sequence.
pub type BitStr = BitSlice<u8, Msb0>;

/// Parses a textual bit-string made of '0' and '1'.
pub fn parse_bits(s: &str) -> Result<Bits> {
    let mut bits = Bits::with_capacity(s.len());
    for (position, c) in s.chars().enumerate() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            found => return Err(Error::InvalidInput { position, found }),
        }
    }

    Ok(bits)
}

pub fn bits_to_string(bits: &BitStr) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

pub fn pack(bits: &BitStr) -> Vec<u8> {
    let padding = 8 - bits.len() % 8;

    let mut padded = Bits::with_capacity(padding + bits.len());
    padded.resize(padding - 1, false);
    padded.push(true);
    padded.extend_from_bitslice(bits);
    debug_assert_eq!(padded.len() % 8, 0);

    padded.into_vec()
}

pub fn pack_str(s: &str) -> Result<Vec<u8>> {
    parse_bits(s).map(|bits| pack(&bits))
}

/// Strips the padding written by [`pack`] and returns the data bits.
///
/// If the first byte holds no sentinel, the whole first byte is dropped.
pub fn unpack(bytes: &[u8]) -> Bits {
    let bits = bytes.view_bits::<Msb0>();
    let head = &bits[..bits.len().min(8)];

    let start = match head.first_one() {
        Some(idx) => idx + 1,
        None => head.len(),
    };

    bits[start..].to_bitvec()
}

/// Packs `bits` and writes them to `path`, replacing its contents.
pub fn write_bit_string<P: AsRef<Path>>(path: P, bits: &BitStr) -> Result<()> {
    let bytes = pack(bits);

    let mut out = BufWriter::new(File::create(path.as_ref())?);
    out.write_all(&bytes)?;
    out.flush()?;

    debug!("wrote {} bits as {} bytes to {}", bits.len(), bytes.len(), path.as_ref().display());
    Ok(())
}

/// Reads `path` and returns the data bits written by [`write_bit_string`].
pub fn read_bit_string<P: AsRef<Path>>(path: P) -> Result<Bits> {
    let mut bytes = Vec::new();
    File::open(path.as_ref())?.read_to_end(&mut bytes)?;

    Ok(unpack(&bytes))
}
