use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use derivative::Derivative;
use log::debug;
use total_float_wrap::TotalF64;

/// A symbol (or, for internal tree nodes, no symbol) with its probability.
///
/// Ordering and equality look at the probability only, so a stable sort keeps
/// equally weighted entries in the order they were produced.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
pub struct WeightedSymbol {
    probability: TotalF64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    symbol: Option<u8>,
}

impl WeightedSymbol {
    pub fn new(symbol: u8, probability: f64) -> Self {
        Self {
            probability: TotalF64(probability),
            symbol: Some(symbol),
        }
    }

    pub(crate) fn combined(probability: f64) -> Self {
        Self {
            probability: TotalF64(probability),
            symbol: None,
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability.0
    }

    pub fn symbol(&self) -> Option<u8> {
        self.symbol
    }
}

/// Counts every symbol of `symbols` and returns one entry per observed symbol,
/// weighted by `count / total` and sorted ascending by weight.
///
/// Entries are produced in ordinal order before the sort, which therefore
/// decides ties. When only one distinct symbol occurs, its successor in the
/// alphabet is added with weight 0 so the tree always has two leaves.
pub fn sorted_frequencies<I>(symbols: I, alphabet: &Alphabet) -> Result<Vec<WeightedSymbol>>
where
    I: IntoIterator<Item = u8>,
{
    let mut counts = vec![0usize; usize::from(alphabet.size())];
    let mut total = 0usize;

    for s in symbols {
        if !alphabet.contains(s) {
            return Err(Error::SymbolOutOfRange {
                symbol: s,
                size: alphabet.size(),
            });
        }
        counts[usize::from(s)] += 1;
        total += 1;
    }

    if total == 0 {
        return Err(Error::EmptyAlphabet);
    }

    let mut freq: Vec<WeightedSymbol> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(ordinal, &count)| WeightedSymbol::new(ordinal as u8, count as f64 / total as f64))
        .collect();

    debug!("{} distinct symbols across {} input symbols", freq.len(), total);

    if let [only] = freq.as_slice() {
        let neighbour = only.symbol.map(|s| alphabet.successor(s)).unwrap_or(0);
        debug!("single symbol input, adding synthetic neighbour {}", neighbour);
        freq.push(WeightedSymbol::new(neighbour, 0.0));
    }

    // stable, so ties keep ordinal order
    freq.sort();
    Ok(freq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols_of(freq: &[WeightedSymbol]) -> Vec<u8> {
        freq.iter().filter_map(WeightedSymbol::symbol).collect()
    }

    #[test]
    fn weighted_symbol_compare_prob_only() {
        let a = WeightedSymbol::new(b'a', 0.25);
        let b = WeightedSymbol::new(b'b', 0.25);

        assert_eq!(a, b);
        assert!(WeightedSymbol::new(b'z', 0.1) < a);
    }

    #[test]
    fn weights_are_normalized_and_sorted() {
        let freq = sorted_frequencies(b"abracadabra".iter().copied(), &Alphabet::ASCII).unwrap();

        // a:5 b:2 r:2 c:1 d:1
        assert_eq!(symbols_of(&freq), b"cdbra".to_vec());
        assert_eq!(freq[0].probability(), 1.0 / 11.0);
        assert_eq!(freq[4].probability(), 5.0 / 11.0);

        let sum: f64 = freq.iter().map(WeightedSymbol::probability).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ties_keep_ordinal_order() {
        let freq = sorted_frequencies(b"zyxxyz".iter().copied(), &Alphabet::ASCII).unwrap();
        assert_eq!(symbols_of(&freq), b"xyz".to_vec());
    }

    #[test]
    fn single_symbol_gets_synthetic_neighbour() {
        let freq = sorted_frequencies(b"aaaa".iter().copied(), &Alphabet::ASCII).unwrap();

        assert_eq!(freq.len(), 2);
        assert_eq!(freq[0].symbol(), Some(b'b'));
        assert_eq!(freq[0].probability(), 0.0);
        assert_eq!(freq[1].symbol(), Some(b'a'));
        assert_eq!(freq[1].probability(), 1.0);
    }

    #[test]
    fn synthetic_neighbour_wraps_at_last_ordinal() {
        let freq = sorted_frequencies([127u8, 127], &Alphabet::ASCII).unwrap();
        assert_eq!(symbols_of(&freq), vec![0, 127]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = sorted_frequencies(std::iter::empty(), &Alphabet::ASCII).unwrap_err();
        assert!(matches!(err, Error::EmptyAlphabet));
    }

    #[test]
    fn out_of_range_symbol_is_an_error() {
        let err = sorted_frequencies([b'a', 200], &Alphabet::ASCII).unwrap_err();
        assert!(matches!(err, Error::SymbolOutOfRange { symbol: 200, size: 128 }));

        assert!(sorted_frequencies([b'a', 200], &Alphabet::BYTE).is_ok());
    }
}
