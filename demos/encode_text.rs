use huffman_codec::bits::{bits_to_string, unpack};
use huffman_codec::{encode, Alphabet, Decoder, EncodingTable};

fn main() {
    let s = String::from("Hello my name is Sam!");
    let encoded = encode(s.as_bytes(), &Alphabet::ASCII).unwrap();

    let table = EncodingTable::from_tree(&encoded.tree);
    let mut codes: Vec<_> = table.iter().collect();
    codes.sort_by_key(|&(sym, _)| sym);
    for (sym, code) in codes {
        println!("{:?} => {}", sym as char, bits_to_string(code));
    }

    let bits = unpack(&encoded.bytes);
    let dec = String::from_utf8(Decoder::new(&encoded.tree).decode(&bits).unwrap());

    println!("{} bytes -> {} bytes", s.len(), encoded.bytes.len());
    println!("{:?}", dec);
}
