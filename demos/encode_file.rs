use huffman_codec::{decode_file, encode_file, Alphabet, Node, SerializableTree};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Everything a later session needs besides the encoded file itself.
#[derive(Serialize, Deserialize)]
struct TreeFile {
    alphabet: Alphabet,
    tree: SerializableTree,
}

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    // encode scope - save the packed bits and the tree
    {
        let alphabet = Alphabet::BYTE;
        let tree = encode_file(&fp, "encoded.bin", &alphabet)
            .expect("First argument was not a valid filepath.");

        let saved = TreeFile {
            alphabet,
            tree: (&tree).into(),
        };
        fs::write("tree.mp", rmp_serde::to_vec(&saved).unwrap()).unwrap();
    }

    // decode scope - restore the tree and decode
    {
        let file_data = fs::read("tree.mp").unwrap();
        let saved: TreeFile = rmp_serde::from_slice(&file_data).unwrap();
        let tree = Node::try_from(saved.tree).unwrap();

        decode_file("encoded.bin", &tree, "decoded.txt").unwrap();
    }

    let original = fs::metadata(&fp).unwrap().len();
    let encoded = fs::metadata("encoded.bin").unwrap().len();
    println!("{} bytes -> {} bytes", original, encoded);
}
