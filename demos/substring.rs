//! Example: weighted approximate common substring under both weighting
//! scenarios.
//!
//! Run with:
//! `cargo run --example substring`

use dp_kernels::{CharWeights, InputError, MatcherBuilder};

fn main() -> Result<(), InputError> {
    let s = b"THEQUICKBROWNFOXJUMPS";
    let t = b"AQUICKBRAWNFIXJUMPED";

    // Scenario 1: every letter weighs 1.0, mismatches cost 10.
    let uniform = MatcherBuilder::uniform().with_penalty(10.0).build()?;
    println!("uniform, penalty 10: {}", uniform.try_find_best_match(s, t)?);

    // Scenario 2: English letter frequencies rescaled into [1, 10]; sweep the
    // penalty from the lightest to the heaviest weight.
    let freq = CharWeights::english_frequency();
    for penalty in freq.penalty_sweep(10) {
        let matcher = MatcherBuilder::new(freq.clone())
            .with_penalty(penalty)
            .build()?;
        println!("frequency, penalty {penalty:6.3}: {}", matcher.try_find_best_match(s, t)?);
    }
    Ok(())
}
