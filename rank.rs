use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::word_types::{FrequencyMap, RankedWord};

/// Returns the `top_n` most frequent words, highest count first.
///
/// Equal counts keep first-seen order (the word that appeared earlier in the
/// text ranks higher). Asking for more words than exist returns them all; an
/// empty map yields an empty ranking, which callers that need at least one
/// row must check for (see [`crate::WordFrequencies::ensure_data`]).
pub fn rank(freq: &FrequencyMap, top_n: NonZeroUsize) -> Vec<RankedWord> {
    freq.iter()
        // stable sort: ties stay in first-seen order
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(top_n.get())
        .map(RankedWord::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use proptest::prelude::*;

    fn n(v: usize) -> NonZeroUsize {
        NonZeroUsize::new(v).unwrap()
    }

    #[test]
    fn ties_follow_first_appearance() {
        let freq = aggregate(&["the", "cat", "sat", "the", "cat", "ran"]);
        assert_eq!(
            rank(&freq, n(2)),
            vec![RankedWord::new("the", 2), RankedWord::new("cat", 2)]
        );
        assert_eq!(
            rank(&freq, n(4)),
            vec![
                RankedWord::new("the", 2),
                RankedWord::new("cat", 2),
                RankedWord::new("sat", 1),
                RankedWord::new("ran", 1),
            ]
        );
    }

    #[test]
    fn higher_count_beats_earlier_appearance() {
        let freq = aggregate(&["a", "b", "b", "c", "c", "c"]);
        let words: Vec<_> = rank(&freq, n(3)).into_iter().map(|r| r.word).collect();
        assert_eq!(words, vec!["c", "b", "a"]);
    }

    #[test]
    fn oversized_request_returns_everything() {
        let freq = aggregate(&["x", "y"]);
        assert_eq!(rank(&freq, n(10)).len(), 2);
    }

    #[test]
    fn empty_map_ranks_to_nothing() {
        assert!(rank(&FrequencyMap::new(), n(10)).is_empty());
    }

    proptest! {
        #[test]
        fn sorted_descending_and_bounded(
            tokens in prop::collection::vec("[a-h]", 0..300),
            top in 1usize..12,
        ) {
            let freq = aggregate(&tokens);
            let ranked = rank(&freq, n(top));
            prop_assert_eq!(ranked.len(), top.min(freq.len()));
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
        }
    }
}
