//! Regex-based replacer implementation.

use regex::Regex;

use super::{ReplaceGroups, Replacer};
use crate::error::{GeoQueryError, Result};

/// A replacer driven by one regular expression and variant templates.
///
/// Every non-overlapping match yields one group keyed by the whole matched
/// text. Its variants are the templates expanded against the match
/// captures (`$1`, `${1}`, `${name}`), duplicates dropped in order.
#[derive(Clone, Debug)]
pub struct PatternReplacer {
    pattern: Regex,
    templates: Vec<String>,
}

impl PatternReplacer {
    /// Create a replacer from a pattern and its variant templates.
    pub fn new<I, S>(pattern: &str, templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regex = Regex::new(pattern).map_err(|e| {
            GeoQueryError::analysis(format!("Invalid replacer pattern '{pattern}': {e}"))
        })?;

        Ok(Self::with_regex(regex, templates))
    }

    /// Create a replacer from an already compiled regex.
    pub fn with_regex<I, S>(pattern: Regex, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PatternReplacer {
            pattern,
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the regex pattern used by this replacer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }
}

impl Replacer for PatternReplacer {
    fn replace_groups(&self, text: &str) -> ReplaceGroups {
        let mut groups = ReplaceGroups::new();

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.is_empty() {
                continue;
            }

            let variants = groups.entry(whole.as_str().to_string()).or_default();
            for template in &self.templates {
                let mut variant = String::new();
                caps.expand(template, &mut variant);
                if !variants.contains(&variant) {
                    variants.push(variant);
                }
            }
        }

        groups
    }

    fn name(&self) -> &str {
        self.pattern.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replacer() {
        let replacer = PatternReplacer::new(r"main str\b", ["main street", "main st"]).unwrap();
        let groups = replacer.replace_groups("123 main str");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["main str"], vec!["main street", "main st"]);
    }

    #[test]
    fn test_capture_expansion() {
        let replacer =
            PatternReplacer::new(r"(?P<num>\d+)\s*(?P<letter>[a-z])\b", ["${num}${letter}", "${num} ${letter}"])
                .unwrap();
        let groups = replacer.replace_groups("lenina 12 b");

        assert_eq!(groups["12 b"], vec!["12b", "12 b"]);
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let replacer = PatternReplacer::new(r"\d+[a-z]", ["x"]).unwrap();
        let groups = replacer.replace_groups("1a 22b 1a");
        let keys: Vec<_> = groups.keys().cloned().collect();

        assert_eq!(keys, vec!["1a", "22b"]);
    }

    #[test]
    fn test_duplicate_variants_dropped() {
        let replacer = PatternReplacer::new(r"(\d+)", ["$1", "${1}"]).unwrap();
        let groups = replacer.replace_groups("7");

        assert_eq!(groups["7"], vec!["7"]);
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        let replacer = PatternReplacer::new(r"x*", ["y"]).unwrap();
        let groups = replacer.replace_groups("abc");

        assert!(groups.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternReplacer::new("(", ["x"]).unwrap_err();
        assert!(err.to_string().starts_with("Analysis error: Invalid replacer pattern"));
    }
}
