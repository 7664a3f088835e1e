use dp_kernels::{
    ByteWeights, CharWeights, InputError, MatcherBuilder, SubstringMatch, WeightedSubstringMatcher,
};

#[test]
fn uniform_weights_stop_before_a_costly_mismatch() {
    let matcher = MatcherBuilder::uniform().with_penalty(10.0).build().unwrap();
    let best = matcher.find_best_match(b"ABCD", b"ABCE");
    assert_eq!(best.substring1, b"ABC");
    assert_eq!(best.substring2, b"ABC");
    assert_eq!((best.position1, best.position2), (0, 0));
    assert_eq!(best.length, 3);
    assert_eq!(best.score, 3.0);
    assert_eq!(best.mismatches, 0);
}

#[test]
fn empty_sequences_give_empty_match() {
    let matcher = WeightedSubstringMatcher::new(CharWeights::english_frequency(), 1.0);
    let pairs: [(&[u8], &[u8]); 3] = [(b"", b""), (b"ABC", b""), (b"", b"XYZ")];
    for (s, t) in pairs {
        let best = matcher.find_best_match(s, t);
        assert_eq!(best, SubstringMatch::empty());
        assert_eq!(best.length, 0);
        assert_eq!(best.score, 0.0);
        assert!(best.substring1.is_empty() && best.substring2.is_empty());
    }
}

#[test]
fn matcher_is_reusable_across_pairs() {
    let matcher = MatcherBuilder::uniform().with_penalty(10.0).build().unwrap();
    let a = matcher.find_best_match(b"HELLOWORLD", b"YELLOW");
    let b = matcher.find_best_match(b"ABCD", b"ABCE");
    let a_again = matcher.find_best_match(b"HELLOWORLD", b"YELLOW");
    assert_eq!(a, a_again);
    assert_eq!(a.substring1, b"ELLOW");
    assert_eq!((a.position1, a.position2), (1, 1));
    assert_eq!(b.substring1, b"ABC");
}

#[test]
fn frequency_weights_prefer_common_letters() {
    // "ZQ" and "ET" both match in full, but E and T weigh far more.
    let matcher = MatcherBuilder::english_frequency()
        .with_penalty(10.0)
        .build()
        .unwrap();
    let best = matcher.find_best_match(b"ZQXET", b"ETAZQ");
    assert_eq!(best.substring1, b"ET");
    assert_eq!((best.position1, best.position2), (3, 0));
    let weights = CharWeights::english_frequency();
    let expected = weights.as_array()[4] + weights.as_array()[19];
    assert!((best.score - expected).abs() < 1e-12);
}

#[test]
fn penalty_sweep_shrinks_matches_as_penalty_grows() {
    // TEETH matches in full; bridging X/Y to also match ZQ only pays while
    // the penalty stays below w(Z) + w(Q) ~= 2.01.
    let freq = CharWeights::english_frequency();
    let s = b"TEETHXZQ";
    let t = b"TEETHYZQ";
    let lengths: Vec<usize> = freq
        .penalty_sweep(10)
        .into_iter()
        .map(|p| {
            WeightedSubstringMatcher::new(freq.clone(), p)
                .find_best_match(s, t)
                .length
        })
        .collect();
    assert_eq!(lengths.len(), 11);
    assert_eq!(&lengths[..3], &[8, 8, 5]);
    assert_eq!(lengths[10], 5);
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn mismatches_are_counted_from_the_substrings() {
    let matcher = WeightedSubstringMatcher::new(CharWeights::uniform(3.0), 1.0);
    let best = matcher.find_best_match(b"AAXAAYAA", b"AAQAARAA");
    assert_eq!(best.length, 8);
    assert_eq!(best.mismatches, 2);
    assert_eq!(best.score, 6.0 * 3.0 - 2.0);
}

#[test]
fn unknown_symbols_are_reported_not_scored() {
    let matcher = MatcherBuilder::uniform().build().unwrap();
    assert_eq!(
        matcher.try_find_best_match(b"HELLO", b"WORLD!"),
        Err(InputError::UnknownSymbol {
            sequence: 1,
            position: 5,
            symbol: '!'
        })
    );
}

#[test]
fn byte_alphabets_work_end_to_end() {
    let dna = ByteWeights::uniform(b"ACGT", 1.0);
    let matcher = MatcherBuilder::new(dna).with_penalty(3.0).build().unwrap();
    let best = matcher
        .try_find_best_match(b"GGGACGTACC", b"TTACGTATT")
        .unwrap();
    assert_eq!(best.substring1, b"ACGTA");
    assert_eq!((best.position1, best.position2), (3, 2));
    assert_eq!(best.score, 5.0);
}
