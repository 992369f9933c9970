/// Splits normalized text on runs of whitespace.
///
/// Tokens borrow from `text`; leading, trailing and repeated whitespace never
/// yields an empty token.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
