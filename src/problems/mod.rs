//! The two dynamic-programming kernels.
//!
//! - [`zero_square`]        : largest all-zero square in a binary matrix.
//! - [`weighted_substring`] : best weighted approximate common substring.
//!
//! They share no state and can be used independently.

pub mod weighted_substring;
pub mod zero_square;
