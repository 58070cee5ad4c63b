//! Character removal filter.

use ahash::AHashSet;

use super::CharFilter;

/// A char filter that deletes every character contained in a set.
#[derive(Clone, Debug, Default)]
pub struct RemoveCharsFilter {
    chars: AHashSet<char>,
}

impl RemoveCharsFilter {
    /// Create a filter removing each character of `chars`.
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl CharFilter for RemoveCharsFilter {
    fn filter(&self, input: &str) -> String {
        if self.chars.is_empty() {
            return input.to_string();
        }
        input.chars().filter(|c| !self.chars.contains(c)).collect()
    }

    fn name(&self) -> &'static str {
        "remove_chars"
    }
}
