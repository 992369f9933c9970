use crate::word_types::FrequencyMap;

/// Counts occurrences of each distinct token in one pass.
///
/// The whole token sequence is counted as a single unit. Combining partial
/// counts from separately counted pieces goes through
/// [`FrequencyMap::merge`], which sums per-word counts.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for token in tokens {
        freq.add(token.as_ref(), 1);
    }
    freq
}
