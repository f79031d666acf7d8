//! Encode and decode drivers tying the pieces together.

use crate::alphabet::Alphabet;
use crate::bits::{pack, read_bit_string, unpack, write_bit_string, Bits};
use crate::encoding::{Decoder, EncodingTable};
use crate::error::Result;
use crate::frequency::sorted_frequencies;
use crate::tree::{build_tree, Node};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// The output of [`encode`]: the packed stream and the tree needed to
/// decode it.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub tree: Node,
    pub bytes: Vec<u8>,
}

fn encode_bits(text: &[u8], alphabet: &Alphabet) -> Result<(Node, Bits)> {
    let freq = sorted_frequencies(text.iter().copied(), alphabet)?;
    let tree = build_tree(freq)?;
    let table = EncodingTable::from_tree(&tree);

    let bits = table.encode(text.iter().copied());
    Ok((tree, bits))
}

/// Builds a tree for `text` and encodes `text` with it.
pub fn encode(text: &[u8], alphabet: &Alphabet) -> Result<Encoded> {
    let (tree, bits) = encode_bits(text, alphabet)?;
    let bytes = pack(&bits);
    debug!("encoded {} symbols into {} bits, {} bytes", text.len(), bits.len(), bytes.len());

    Ok(Encoded { tree, bytes })
}

/// Decodes a packed stream with the tree that produced it.
pub fn decode(bytes: &[u8], tree: &Node) -> Result<Vec<u8>> {
    Decoder::new(tree).decode(&unpack(bytes))
}

/// Reads all of `input`, encodes it and writes the packed bytes to `output`.
pub fn encode_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    alphabet: &Alphabet,
) -> Result<Node> {
    let mut text = Vec::new();
    input.read_to_end(&mut text)?;

    let Encoded { tree, bytes } = encode(&text, alphabet)?;
    output.write_all(&bytes)?;
    output.flush()?;

    Ok(tree)
}

pub fn decode_stream<R: Read, W: Write>(mut input: R, tree: &Node, mut output: W) -> Result<()> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    output.write_all(&decode(&bytes, tree)?)?;
    output.flush()?;
    Ok(())
}

pub fn encode_file<P, Q>(text_file: P, encoded_file: Q, alphabet: &Alphabet) -> Result<Node>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let text = fs::read(text_file)?;

    let (tree, bits) = encode_bits(&text, alphabet)?;
    write_bit_string(encoded_file, &bits)?;
    Ok(tree)
}

pub fn decode_file<P, Q>(encoded_file: P, tree: &Node, decoded_file: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let bits = read_bit_string(encoded_file)?;
    let text = Decoder::new(tree).decode(&bits)?;

    let mut out = BufWriter::new(File::create(decoded_file.as_ref())?);
    out.write_all(&text)?;
    out.flush()?;
    Ok(())
}
