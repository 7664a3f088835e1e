//! Core trait definitions for symbol scoring.
//!
//! The weighted substring matcher is alphabet-agnostic: all it needs is a way
//! to look up the weight earned when two aligned symbols are equal. Implement
//! [`WeightTable`] for whatever alphabet your sequences use.
//!
//! Two implementations ship with the crate:
//! - [`CharWeights`](crate::weights::CharWeights): a dense table for `A..=Z`.
//! - [`ByteWeights`](crate::weights::ByteWeights): a sparse table over any bytes.

/// Symbol → weight lookup used by the matcher.
///
/// Semantics:
/// - `weight(s)` returns `Some(w)` if `s` belongs to the table's alphabet.
/// - A symbol outside the alphabet returns `None`; the matcher treats such a
///   symbol as a caller error (see
///   [`WeightedSubstringMatcher::try_find_best_match`](crate::problems::weighted_substring::WeightedSubstringMatcher::try_find_best_match)).
///
/// Lookups sit in the innermost loop of the matcher, so implementations
/// should be a plain index or two. With the `parallel` feature, row workers
/// share one table by reference.
pub trait WeightTable: Sync {
    /// Weight awarded when two aligned symbols are both `symbol`.
    fn weight(&self, symbol: u8) -> Option<f64>;

    /// Returns true if `symbol` has a weight.
    #[inline]
    fn contains(&self, symbol: u8) -> bool {
        self.weight(symbol).is_some()
    }
}

impl<T: WeightTable + ?Sized> WeightTable for &T {
    #[inline]
    fn weight(&self, symbol: u8) -> Option<f64> {
        (**self).weight(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::WeightTable;

    struct Vowels;

    impl WeightTable for Vowels {
        fn weight(&self, symbol: u8) -> Option<f64> {
            b"AEIOU".contains(&symbol).then_some(2.0)
        }
    }

    #[test]
    fn contains_follows_weight() {
        assert!(Vowels.contains(b'E'));
        assert!(!Vowels.contains(b'B'));
    }

    #[test]
    fn references_forward_lookups() {
        let table = &Vowels;
        assert_eq!(WeightTable::weight(&table, b'A'), Some(2.0));
        assert_eq!(WeightTable::weight(&table, b'Z'), None);
    }
}
