//! Property tests for the codec laws: round trip, tree validity, prefix-free
//! codes, determinism and padding.

use huffman_codec::bits::{bits_to_string, pack, unpack, Bits};
use huffman_codec::{build_tree, decode, encode, sorted_frequencies, Alphabet, EncodingTable, Node};
use proptest::prelude::*;

fn ascii_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..128, 1..400)
}

fn tree_for(text: &[u8]) -> Node {
    build_tree(sorted_frequencies(text.iter().copied(), &Alphabet::ASCII).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn prop_round_trip(text in ascii_text()) {
        let encoded = encode(&text, &Alphabet::ASCII).unwrap();
        prop_assert_eq!(decode(&encoded.bytes, &encoded.tree).unwrap(), text);
    }

    #[test]
    fn prop_round_trip_full_bytes(text in prop::collection::vec(any::<u8>(), 1..400)) {
        let encoded = encode(&text, &Alphabet::BYTE).unwrap();
        prop_assert_eq!(decode(&encoded.bytes, &encoded.tree).unwrap(), text);
    }

    #[test]
    fn prop_tree_validity(text in ascii_text()) {
        let root = tree_for(&text);
        let leaves = root.leaves();

        prop_assert!(leaves.len() >= 2);

        let sum: f64 = leaves.iter().map(|n| n.probability()).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);

        let mut symbols: Vec<u8> = leaves.iter().filter_map(|n| n.symbol()).collect();
        prop_assert_eq!(symbols.len(), leaves.len());
        symbols.sort_unstable();
        symbols.dedup();
        prop_assert_eq!(symbols.len(), leaves.len());

        let mut stack = vec![&root];
        while let Some(node) = stack.pop() {
            if let (Some(l), Some(r)) = (node.left(), node.right()) {
                prop_assert_eq!(node.symbol(), None);
                stack.push(l);
                stack.push(r);
            } else {
                prop_assert!(node.is_leaf());
            }
        }
    }

    #[test]
    fn prop_prefix_free(text in ascii_text()) {
        let table = EncodingTable::from_tree(&tree_for(&text));
        let codes: Vec<String> = table.iter().map(|(_, c)| bits_to_string(c)).collect();

        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                prop_assert!(i == j || !b.starts_with(a.as_str()));
            }
        }
    }

    #[test]
    fn prop_deterministic(text in ascii_text()) {
        let first = encode(&text, &Alphabet::ASCII).unwrap();
        let second = encode(&text, &Alphabet::ASCII).unwrap();
        prop_assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn prop_padding_round_trip(bits in prop::collection::vec(any::<bool>(), 0..64)) {
        let bits: Bits = bits.into_iter().collect();
        let packed = pack(&bits);

        prop_assert_eq!(packed.len(), bits.len() / 8 + 1);
        prop_assert_eq!(unpack(&packed), bits);
    }
}

#[test]
fn abab_has_one_bit_codes_every_run() {
    for _ in 0..10 {
        let table = EncodingTable::from_tree(&tree_for(b"abab"));
        assert_eq!(bits_to_string(table.get(b'a').unwrap()), "0");
        assert_eq!(bits_to_string(table.get(b'b').unwrap()), "1");
    }
}

#[test]
fn aaaa_round_trips_through_two_leaf_tree() {
    let encoded = encode(b"aaaa", &Alphabet::ASCII).unwrap();
    let leaves = encoded.tree.leaves();

    assert_eq!(leaves.len(), 2);
    assert!(leaves.iter().any(|l| l.symbol() == Some(b'a')));
    assert!(leaves.iter().any(|l| l.probability() == 0.0));
    assert_eq!(decode(&encoded.bytes, &encoded.tree).unwrap(), b"aaaa".to_vec());
}
