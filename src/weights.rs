//! Weight tables and the scoring scenarios built on them.
//!
//! [`CharWeights`] covers the uppercase Latin alphabet and provides the two
//! reference scenarios:
//! - uniform weights (every letter worth the same), and
//! - English-frequency weights, linearly rescaled into `[1, 10]` so common
//!   letters (E, T, A) earn more than rare ones (Z, Q, X).
//!
//! [`ByteWeights`] is the escape hatch for any other byte alphabet.

use crate::error::InputError;
use crate::traits::WeightTable;

/// Number of symbols in the `A..=Z` alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Relative frequency of each letter in English text, in percent, `A..=Z`.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Lower end of the rescaled frequency weights.
pub const FREQUENCY_WEIGHT_MIN: f64 = 1.0;
/// Upper end of the rescaled frequency weights.
pub const FREQUENCY_WEIGHT_MAX: f64 = 10.0;

/// Dense weight table for `A..=Z`, indexed by `symbol - b'A'`.
#[derive(Clone, Debug, PartialEq)]
pub struct CharWeights {
    weights: [f64; ALPHABET_SIZE],
}

impl CharWeights {
    pub fn new(weights: [f64; ALPHABET_SIZE]) -> Self {
        Self { weights }
    }

    /// Build from a slice that must hold exactly [`ALPHABET_SIZE`] entries.
    pub fn from_slice(weights: &[f64]) -> Result<Self, InputError> {
        let weights: [f64; ALPHABET_SIZE] =
            weights
                .try_into()
                .map_err(|_| InputError::WeightTableSize {
                    expected: ALPHABET_SIZE,
                    found: weights.len(),
                })?;
        Ok(Self { weights })
    }

    /// Every letter weighs `weight`.
    pub fn uniform(weight: f64) -> Self {
        Self {
            weights: [weight; ALPHABET_SIZE],
        }
    }

    /// English letter frequencies rescaled into `[1, 10]`.
    pub fn english_frequency() -> Self {
        Self::rescaled(
            &ENGLISH_LETTER_FREQUENCIES,
            FREQUENCY_WEIGHT_MIN,
            FREQUENCY_WEIGHT_MAX,
        )
    }

    /// Linearly map `raw` so its minimum lands on `lo` and its maximum on `hi`.
    ///
    /// A constant `raw` maps every letter to `lo`.
    pub fn rescaled(raw: &[f64; ALPHABET_SIZE], lo: f64, hi: f64) -> Self {
        let (min, max) = min_max(raw);
        let span = max - min;
        let mut weights = [lo; ALPHABET_SIZE];
        if span > 0.0 {
            for (w, &r) in weights.iter_mut().zip(raw) {
                *w = lo + (hi - lo) * (r - min) / span;
            }
        }
        Self { weights }
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.weights
    }

    pub fn min_weight(&self) -> f64 {
        min_max(&self.weights).0
    }

    pub fn max_weight(&self) -> f64 {
        min_max(&self.weights).1
    }

    /// Penalties spread evenly from the smallest to the largest weight.
    ///
    /// Returns `steps + 1` values: `min + (max - min) * k / steps` for
    /// `k = 0..=steps`. With `steps == 0` only the minimum is returned.
    pub fn penalty_sweep(&self, steps: usize) -> Vec<f64> {
        let (min, max) = min_max(&self.weights);
        if steps == 0 {
            return vec![min];
        }
        (0..=steps)
            .map(|k| min + (max - min) * k as f64 / steps as f64)
            .collect()
    }
}

impl Default for CharWeights {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl WeightTable for CharWeights {
    #[inline]
    fn weight(&self, symbol: u8) -> Option<f64> {
        let idx = symbol.checked_sub(b'A')? as usize;
        self.weights.get(idx).copied()
    }
}

/// Sparse weight table over arbitrary bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ByteWeights {
    table: Box<[Option<f64>; 256]>,
}

impl ByteWeights {
    /// Table with no symbols.
    pub fn empty() -> Self {
        Self {
            table: Box::new([None; 256]),
        }
    }

    /// Table holding each `(symbol, weight)` pair; later pairs override earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, f64)>,
    {
        let mut table = Self::empty();
        for (symbol, weight) in pairs {
            table.set(symbol, weight);
        }
        table
    }

    /// Every symbol of `alphabet` weighs `weight`.
    pub fn uniform(alphabet: &[u8], weight: f64) -> Self {
        Self::from_pairs(alphabet.iter().map(|&s| (s, weight)))
    }

    pub fn set(&mut self, symbol: u8, weight: f64) {
        self.table[symbol as usize] = Some(weight);
    }

    /// Number of symbols with a weight.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|w| w.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&CharWeights> for ByteWeights {
    fn from(weights: &CharWeights) -> Self {
        Self::from_pairs((b'A'..=b'Z').zip(weights.as_array().iter().copied()))
    }
}

impl WeightTable for ByteWeights {
    #[inline]
    fn weight(&self, symbol: u8) -> Option<f64> {
        self.table[symbol as usize]
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
