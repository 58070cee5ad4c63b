//! Separator-set tokenizer implementation.

use ahash::AHashSet;

use super::Tokenizer;

/// A tokenizer that splits on any character of a configured set.
///
/// Adjacent separators never produce empty tokens.
#[derive(Clone, Debug, Default)]
pub struct SeparatorTokenizer {
    separators: AHashSet<char>,
}

impl SeparatorTokenizer {
    /// Create a tokenizer splitting on each character of `separators`.
    pub fn new(separators: &str) -> Self {
        SeparatorTokenizer {
            separators: separators.chars().collect(),
        }
    }

    /// Check whether `c` is a separator.
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| self.is_separator(c))
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}
