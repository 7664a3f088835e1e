use crate::error::InputError;
use crate::problems::weighted_substring::WeightedSubstringMatcher;
use crate::traits::WeightTable;
use crate::weights::CharWeights;

/// Mismatch penalty used when none is given.
pub const DEFAULT_MISMATCH_PENALTY: f64 = 10.0;

pub struct MatcherBuilder<W: WeightTable> {
    weights: W,
    penalty: f64,
}

impl MatcherBuilder<CharWeights> {
    /// Every letter weighs 1.0.
    pub fn uniform() -> Self {
        Self::new(CharWeights::uniform(1.0))
    }

    /// English letter frequencies rescaled into `[1, 10]`.
    pub fn english_frequency() -> Self {
        Self::new(CharWeights::english_frequency())
    }
}

impl<W: WeightTable> MatcherBuilder<W> {
    pub fn new(weights: W) -> Self {
        Self {
            weights,
            penalty: DEFAULT_MISMATCH_PENALTY,
        }
    }
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }
    pub fn build(self) -> Result<WeightedSubstringMatcher<W>, InputError> {
        if !self.penalty.is_finite() {
            return Err(InputError::NonFinitePenalty(self.penalty));
        }
        Ok(WeightedSubstringMatcher::new(self.weights, self.penalty))
    }
}
