//! Weighted approximate common substring.
//!
//! Find equal-length substrings `x` of `s` and `y` of `t` maximising
//!
//! ```text
//! score(x, y) = Σ_k  w[x_k]      if x_k == y_k
//!                    -penalty    otherwise
//! ```
//!
//! With `score(L, i, j)` the score of the length-`L` pair ending at `(i, j)`:
//!
//! ```text
//! score(1, i, j) = match(s[i], t[j])
//! score(L, i, j) = score(L-1, i-1, j-1) + match(s[i], t[j])
//! ```
//!
//! Layer `L` reads only layer `L - 1`, so the conceptual 3D table lives in two
//! rolling [`ScoreLayers`]. Time is O(n·m·min(n, m)), space O(n·m).

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::InputError;
use crate::layers::ScoreLayers;
use crate::traits::WeightTable;
use crate::utils::count_mismatches;
use crate::weights::CharWeights;

/// Best-scoring substring pair.
#[derive(Clone, Debug, PartialEq)]
pub struct SubstringMatch {
    pub substring1: Vec<u8>,
    pub substring2: Vec<u8>,
    /// Start offset of `substring1` in the first sequence.
    pub position1: usize,
    /// Start offset of `substring2` in the second sequence.
    pub position2: usize,
    pub length: usize,
    pub score: f64,
    /// Aligned positions where the substrings differ.
    pub mismatches: usize,
}

impl SubstringMatch {
    /// Result when one of the sequences is empty.
    pub fn empty() -> Self {
        Self {
            substring1: Vec::new(),
            substring2: Vec::new(),
            position1: 0,
            position2: 0,
            length: 0,
            score: 0.0,
            mismatches: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for SubstringMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (pos {}) <-> '{}' (pos {}) | Len: {}, Mismatches: {}, Score: {:.2}",
            String::from_utf8_lossy(&self.substring1),
            self.position1,
            String::from_utf8_lossy(&self.substring2),
            self.position2,
            self.length,
            self.mismatches,
            self.score
        )
    }
}

/// Running optimum over `(len, i, j)` triples.
#[derive(Clone, Copy, Debug)]
struct Best {
    score: f64,
    end1: usize,
    end2: usize,
    len: usize,
}

/// Only a strictly greater score replaces the incumbent, so the first
/// maximum in sweep order survives ties.
#[inline]
fn offer(best: &mut Option<Best>, candidate: Best) {
    if best.map_or(true, |b| candidate.score > b.score) {
        *best = Some(candidate);
    }
}

/// Matcher configured with a weight table and a mismatch penalty.
///
/// Reusable across any number of sequence pairs; every call allocates its
/// own scratch layers.
///
/// ```
/// use dp_kernels::{CharWeights, WeightedSubstringMatcher};
///
/// let matcher = WeightedSubstringMatcher::new(CharWeights::uniform(1.0), 10.0);
/// let best = matcher.find_best_match(b"ABCD", b"ABCE");
/// assert_eq!(best.substring1, b"ABC");
/// assert_eq!(best.score, 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedSubstringMatcher<W = CharWeights> {
    weights: W,
    penalty: f64,
}

impl<W: WeightTable> WeightedSubstringMatcher<W> {
    pub fn new(weights: W, penalty: f64) -> Self {
        Self { weights, penalty }
    }

    pub fn weights(&self) -> &W {
        &self.weights
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Contribution of one aligned pair: the symbol's weight on a match,
    /// `-penalty` otherwise.
    ///
    /// # Panics
    /// Panics if `a == b` and the symbol has no weight.
    #[inline]
    pub fn match_score(&self, a: u8, b: u8) -> f64 {
        if a != b {
            return -self.penalty;
        }
        match self.weights.weight(a) {
            Some(w) => w,
            None => panic!("symbol {:?} has no weight", a as char),
        }
    }

    /// Check every symbol of both sequences against the weight table, then
    /// run [`find_best_match`](Self::find_best_match).
    pub fn try_find_best_match(
        &self,
        seq1: &[u8],
        seq2: &[u8],
    ) -> Result<SubstringMatch, InputError> {
        self.validate(0, seq1)?;
        self.validate(1, seq2)?;
        Ok(self.find_best_match(seq1, seq2))
    }

    fn validate(&self, sequence: usize, seq: &[u8]) -> Result<(), InputError> {
        match seq.iter().position(|&s| !self.weights.contains(s)) {
            Some(position) => Err(InputError::UnknownSymbol {
                sequence,
                position,
                symbol: seq[position] as char,
            }),
            None => Ok(()),
        }
    }

    /// Best-scoring equal-length substring pair of `seq1` and `seq2`.
    ///
    /// Ties keep the first optimum met while sweeping lengths ascending, then
    /// end positions in `seq1`, then in `seq2`; a longer pair never displaces
    /// a shorter one of equal score. An empty input yields
    /// [`SubstringMatch::empty`].
    ///
    /// With the `parallel` feature the rows of each layer are filled
    /// concurrently; the result is identical to
    /// [`find_best_match_serial`](Self::find_best_match_serial).
    ///
    /// # Panics
    /// Panics if two equal aligned symbols have no weight. Use
    /// [`try_find_best_match`](Self::try_find_best_match) for unvalidated input.
    pub fn find_best_match(&self, seq1: &[u8], seq2: &[u8]) -> SubstringMatch {
        #[cfg(feature = "parallel")]
        {
            self.search(seq1, seq2, fill_layer_parallel)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.search(seq1, seq2, fill_layer_serial)
        }
    }

    /// Same as [`find_best_match`](Self::find_best_match), always on one thread.
    pub fn find_best_match_serial(&self, seq1: &[u8], seq2: &[u8]) -> SubstringMatch {
        self.search(seq1, seq2, fill_layer_serial)
    }

    fn search<F>(&self, seq1: &[u8], seq2: &[u8], fill_layer: F) -> SubstringMatch
    where
        F: Fn(&Self, Layer<'_>, &mut [f64], &mut Option<Best>),
    {
        let (n, m) = (seq1.len(), seq2.len());
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("find_best_match", len1 = n, len2 = m);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut layers = ScoreLayers::new(n, m);
        let mut best = None;

        for len in 1..=n.min(m) {
            #[cfg(feature = "tracing")]
            let _layer = tracing::trace_span!("layer", len).entered();
            let (previous, current) = layers.split();
            let layer = Layer {
                seq1,
                seq2,
                len,
                previous,
            };
            fill_layer(self, layer, current, &mut best);
            layers.rotate();
        }

        let result = match best {
            None => SubstringMatch::empty(),
            Some(best) => extract_match(seq1, seq2, best),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = result.length,
            score = result.score,
            mismatches = result.mismatches,
            "best substring pair"
        );
        result
    }

    /// Fill row `i` of the current layer and return its first maximum `(score, j)`.
    #[inline]
    fn fill_row(&self, layer: &Layer<'_>, i: usize, row: &mut [f64]) -> Option<(f64, usize)> {
        let m = layer.seq2.len();
        let len = layer.len;
        let a = layer.seq1[i];
        let mut row_best: Option<(f64, usize)> = None;
        for j in len - 1..m {
            let step = self.match_score(a, layer.seq2[j]);
            let score = if len == 1 {
                step
            } else {
                layer.previous[(i - 1) * m + (j - 1)] + step
            };
            row[j] = score;
            if row_best.map_or(true, |(s, _)| score > s) {
                row_best = Some((score, j));
            }
        }
        row_best
    }
}

/// Inputs shared by every row of one length layer.
struct Layer<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    len: usize,
    previous: &'a [f64],
}

fn fill_layer_serial<W: WeightTable>(
    matcher: &WeightedSubstringMatcher<W>,
    layer: Layer<'_>,
    current: &mut [f64],
    best: &mut Option<Best>,
) {
    let m = layer.seq2.len();
    for (i, row) in current.chunks_mut(m).enumerate().skip(layer.len - 1) {
        if let Some((score, j)) = matcher.fill_row(&layer, i, row) {
            offer(
                best,
                Best {
                    score,
                    end1: i,
                    end2: j,
                    len: layer.len,
                },
            );
        }
    }
}

#[cfg(feature = "parallel")]
fn fill_layer_parallel<W: WeightTable>(
    matcher: &WeightedSubstringMatcher<W>,
    layer: Layer<'_>,
    current: &mut [f64],
    best: &mut Option<Best>,
) {
    let m = layer.seq2.len();
    let row_bests: Vec<Option<(f64, usize)>> = current
        .par_chunks_mut(m)
        .enumerate()
        .skip(layer.len - 1)
        .map(|(i, row)| matcher.fill_row(&layer, i, row))
        .collect();
    // Fold in ascending row order so ties resolve exactly as in the serial sweep.
    for (offset, row_best) in row_bests.into_iter().enumerate() {
        if let Some((score, j)) = row_best {
            offer(
                best,
                Best {
                    score,
                    end1: layer.len - 1 + offset,
                    end2: j,
                    len: layer.len,
                },
            );
        }
    }
}

fn extract_match(seq1: &[u8], seq2: &[u8], best: Best) -> SubstringMatch {
    let position1 = best.end1 + 1 - best.len;
    let position2 = best.end2 + 1 - best.len;
    let substring1 = seq1[position1..=best.end1].to_vec();
    let substring2 = seq2[position2..=best.end2].to_vec();
    // Recount directly: the score depends on weights and cannot be inverted.
    let mismatches = count_mismatches(&substring1, &substring2);
    SubstringMatch {
        substring1,
        substring2,
        position1,
        position2,
        length: best.len,
        score: best.score,
        mismatches,
    }
}
