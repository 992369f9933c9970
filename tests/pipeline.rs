use std::collections::HashMap;
use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use word_freq::{aggregate, analyze, normalize, rank, tokenize, Error, RankedWord};

fn top(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn example_walks_through_every_stage() {
    let normalized = normalize("The cat sat. The CAT ran!");
    assert_eq!(normalized, "the cat sat the cat ran");

    let tokens = tokenize(&normalized);
    assert_eq!(tokens, vec!["the", "cat", "sat", "the", "cat", "ran"]);

    let freq = aggregate(&tokens);
    let expected: HashMap<String, u64> =
        HashMap::from([("the".into(), 2), ("cat".into(), 2), ("sat".into(), 1), ("ran".into(), 1)]);
    assert_eq!(freq.to_hash_map(), expected);

    assert_eq!(
        rank(&freq, top(2)),
        vec![RankedWord::new("the", 2), RankedWord::new("cat", 2)]
    );
}

#[test]
fn fixture_document_ranks_as_expected() {
    let report = analyze(include_str!("fixtures/sample.txt"), top(3));
    assert_eq!(report.total_words, 23);
    assert_eq!(report.distinct_words, 18);
    assert_eq!(
        report.words,
        vec![RankedWord::new("a", 4), RankedWord::new("in", 2), RankedWord::new("of", 2)]
    );
}

#[test]
fn empty_document_is_no_data() {
    let report = analyze("", top(10));
    assert!(report.words.is_empty());
    assert!(matches!(report.ensure_data(), Err(Error::NoData)));
}

proptest! {
    #[test]
    fn analysis_totals_agree_with_tokens(text in "[a-dA-D .,!\\n]{0,200}", n in 1usize..8) {
        let report = analyze(&text, top(n));
        let normalized = normalize(&text);
        let tokens = tokenize(&normalized);
        prop_assert_eq!(report.total_words, tokens.len() as u64);
        prop_assert_eq!(report.words.len(), n.min(report.distinct_words));
        prop_assert!(report.words.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
