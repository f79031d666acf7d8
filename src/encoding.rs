use crate::bits::{BitStr, Bits};
use crate::error::{Error, Result};
use crate::tree::Node;
use bitvec::prelude::*;
use log::{debug, trace};
use std::collections::HashMap;

/// Maps every leaf symbol of a tree to its root-to-leaf path
/// (`0` for a left turn, `1` for a right turn).
#[derive(Debug, Clone)]
pub struct EncodingTable {
    encode_table: HashMap<u8, BitBox<u8, Msb0>>,
}

impl EncodingTable {
    pub fn from_tree(root: &Node) -> Self {
        let encode_table = root
            .symbols()
            .into_iter()
            .filter_map(|sym| find_path(root, sym).map(|path| (sym, path.into_boxed_bitslice())))
            .collect();

        Self { encode_table }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitStr> {
        self.encode_table.get(&symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.encode_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode_table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitStr)> {
        self.encode_table.iter().map(|(&sym, code)| (sym, code.as_bitslice()))
    }

    /// Concatenates the codes of `stream` in order. Symbols without a code
    /// are skipped.
    pub fn encode(&self, stream: impl IntoIterator<Item = u8>) -> Bits {
        let mut out = Bits::new();
        for s in stream {
            match self.encode_table.get(&s) {
                Some(code) => out.extend_from_bitslice(code.as_bitslice()),
                None => trace!("no code for symbol {}, skipping", s),
            }
        }

        out
    }
}

/// Depth-first search for the leaf holding `target`, left before right.
fn find_path(root: &Node, target: u8) -> Option<Bits> {
    let mut stack: Vec<(&Node, Bits)> = vec![(root, Bits::new())];

    while let Some((node, path)) = stack.pop() {
        if node.is_leaf() {
            if node.symbol() == Some(target) {
                return Some(path);
            }
            continue;
        }

        if let Some(right) = node.right() {
            let mut p = path.clone();
            p.push(true);
            stack.push((right, p));
        }
        if let Some(left) = node.left() {
            let mut p = path;
            p.push(false);
            stack.push((left, p));
        }
    }

    None
}

/// Walks a tree bit by bit to turn a code stream back into symbols.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    root: &'t Node,
}

impl<'t> Decoder<'t> {
    pub fn new(root: &'t Node) -> Self {
        Self { root }
    }

    /// Decodes `input`, which must end exactly on a symbol boundary.
    pub fn decode(&self, input: &BitStr) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut cursor = self.root;
        let mut mid_path = false;

        for (position, bit) in input.iter().by_vals().enumerate() {
            cursor = cursor.child(bit).ok_or(Error::CorruptedStream { position })?;
            mid_path = true;

            if cursor.is_leaf() {
                let sym = cursor.symbol().ok_or(Error::CorruptedStream { position })?;
                out.push(sym);
                cursor = self.root;
                mid_path = false;
            }
        }

        if mid_path {
            return Err(Error::CorruptedStream {
                position: input.len(),
            });
        }

        debug!("decoded {} bits into {} symbols", input.len(), out.len());
        Ok(out)
    }
}
