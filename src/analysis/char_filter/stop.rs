//! Stop phrase removal.
//!
//! All stop patterns are compiled once into a single case-insensitive
//! alternation. At query time the filter collects every non-overlapping
//! match and deletes the matched spans in one pass; text exposed by a
//! deletion is not scanned again.
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::char_filter::stop::StopPhraseCharFilter;
//!
//! let filter = StopPhraseCharFilter::from_patterns(["\\bcity of "])
//!     .unwrap()
//!     .unwrap();
//! let (text, removed) = filter.strip("city of london");
//!
//! assert_eq!(text, "london");
//! assert!(removed.contains("city of "));
//! ```

use indexmap::IndexSet;
use regex::Regex;

use super::CharFilter;
use crate::error::Result;
use crate::util::pattern::compile_alternation;

/// A char filter that removes stop phrases and reports what it removed.
#[derive(Clone, Debug)]
pub struct StopPhraseCharFilter {
    pattern: Regex,
}

impl StopPhraseCharFilter {
    /// Wrap an already compiled matcher.
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compile stop patterns; `None` when no pattern is configured.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(compile_alternation(patterns)?.map(Self::new))
    }

    /// Get the compiled alternation.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Remove every stop phrase match from `input`.
    ///
    /// Returns the stripped text and the matched phrases in first-seen
    /// order, duplicates collapsed.
    pub fn strip(&self, input: &str) -> (String, IndexSet<String>) {
        let mut output = String::with_capacity(input.len());
        let mut removed = IndexSet::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            if m.is_empty() {
                continue;
            }
            output.push_str(&input[last_match_end..m.start()]);
            removed.insert(m.as_str().to_string());
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, removed)
    }
}

impl CharFilter for StopPhraseCharFilter {
    fn filter(&self, input: &str) -> String {
        self.strip(input).0
    }

    fn name(&self) -> &'static str {
        "stop_phrase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> StopPhraseCharFilter {
        StopPhraseCharFilter::from_patterns(patterns.iter().copied())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_no_patterns() {
        let filter = StopPhraseCharFilter::from_patterns(Vec::<String>::new()).unwrap();
        assert!(filter.is_none());
    }

    #[test]
    fn test_single_occurrence_accounting() {
        let filter = filter(&["россия, "]);
        let input = "россия, москва";
        let (text, removed) = filter.strip(input);

        assert_eq!(text.len(), input.len() - "россия, ".len());
        assert_eq!(removed.len(), 1);
        assert!(removed.contains("россия, "));
    }

    #[test]
    fn test_repeated_phrase_recorded_once() {
        let filter = filter(&["the "]);
        let (text, removed) = filter.strip("the the end");

        assert_eq!(text, "end");
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn test_case_insensitive_match_keeps_matched_form() {
        let filter = filter(&["usa"]);
        let (text, removed) = filter.strip("boston USA");

        assert_eq!(text, "boston ");
        assert_eq!(removed.iter().next().map(String::as_str), Some("USA"));
    }

    #[test]
    fn test_single_pass() {
        // Removing "bc" joins "a" and "d" into "ad", which is not re-scanned.
        let filter = filter(&["bc", "ad"]);
        let (text, removed) = filter.strip("abcd");

        assert_eq!(text, "ad");
        assert_eq!(removed.len(), 1);
    }

    #[test]
    fn test_removed_set_keeps_insertion_order() {
        let filter = filter(&["y", "x"]);
        let (_, removed) = filter.strip("x y x");
        let removed: Vec<_> = removed.into_iter().collect();
        assert_eq!(removed, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter(&["a"]).name(), "stop_phrase");
    }
}
