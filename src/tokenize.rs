use unicode_segmentation::UnicodeSegmentation;

/// Splits `input` on Unicode word boundaries and drops whitespace, so
/// words and punctuation each become one token.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split_word_bounds()
        .filter(|segment| !segment.chars().all(char::is_whitespace))
        .collect()
}
