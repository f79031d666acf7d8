//! A byte-oriented Huffman codec.
//!
//! Encoding counts symbol frequencies, builds a Huffman tree with a two-queue
//! merge, derives a prefix-free code per symbol and packs the concatenated
//! codes into bytes behind a self-describing padding prefix. Decoding strips
//! the padding and walks the same tree bit by bit.
//!
//! The packed stream does not carry the tree; keep the [`Node`] returned by
//! [`encode`] (or persist it through [`SerializableTree`]) to decode later.
//!
//! ```
//! use huffman_codec::{decode, encode, Alphabet};
//!
//! let text = b"Hello my name is Sam!";
//! let encoded = encode(text, &Alphabet::ASCII).unwrap();
//! assert_eq!(decode(&encoded.bytes, &encoded.tree).unwrap(), text.to_vec());
//! ```

pub mod alphabet;
pub mod bits;
pub mod codec;
pub mod encoding;
pub mod error;
pub mod frequency;
pub mod tree;

pub use alphabet::Alphabet;
pub use codec::{decode, decode_file, decode_stream, encode, encode_file, encode_stream, Encoded};
pub use encoding::{Decoder, EncodingTable};
pub use error::{Error, Result};
pub use frequency::{sorted_frequencies, WeightedSymbol};
pub use tree::{build_tree, Node, SerializableTree};
