//! Dynamic-programming kernels
//!
//! This crate provides two small, exact dynamic programs that share nothing
//! but a style:
//!
//! - **Largest zero square**: the largest square block of a binary matrix
//!   made only of zeros, via the classic
//!   `dp[r][c] = 1 + min(top, left, diagonal)` recurrence.
//! - **Weighted approximate common substring**: the equal-length substring
//!   pair of two sequences that maximises a weighted match / uniform
//!   mismatch score, computed length by length over two rolling layers.
//!
//! Both kernels are pure and synchronous. Every call owns its scratch space,
//! and results own copies of the data they describe.
//!
//! ## Quick start
//! ```
//! use dp_kernels::{find_largest_zero_square, BinaryMatrix, MatcherBuilder};
//!
//! let matrix = BinaryMatrix::parse("1 0 0; 0 0 0; 1 0 0").unwrap();
//! let square = find_largest_zero_square(&matrix);
//! assert_eq!(square.size, 2);
//! assert_eq!(square.anchor, Some((0, 1)));
//!
//! let matcher = MatcherBuilder::uniform().with_penalty(10.0).build().unwrap();
//! let best = matcher.try_find_best_match(b"ABCD", b"ABCE").unwrap();
//! assert_eq!(best.substring1, b"ABC");
//! assert_eq!(best.mismatches, 0);
//! ```
//!
//! ## Input validation
//! The kernels assume well-formed input. [`BinaryMatrix`] checks shape and
//! cell values on construction, and
//! [`WeightedSubstringMatcher::try_find_best_match`] checks every symbol
//! against the weight table. Empty inputs are not errors; they produce an
//! empty result.
//!
//! ## Features
//! - `parallel`: fill each score layer's rows with rayon. Results are
//!   identical to the serial sweep.
//! - `tracing`: spans and events around both kernels.

pub mod builder;
pub mod error;
pub mod layers;
pub mod matrix;
pub mod problems;
pub mod synth;
pub mod traits;
pub mod utils;
pub mod weights;

pub use crate::builder::MatcherBuilder;
pub use crate::error::InputError;
pub use crate::matrix::BinaryMatrix;
pub use crate::problems::weighted_substring::{SubstringMatch, WeightedSubstringMatcher};
pub use crate::problems::zero_square::{find_largest_zero_square, SquareResult};
pub use crate::traits::WeightTable;
pub use crate::weights::{ByteWeights, CharWeights};
