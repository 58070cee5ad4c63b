//! The immutable rule set every query is analyzed against.
//!
//! A [`RuleSet`] is built once, before any query is processed, and then
//! shared read-only (typically behind an `Arc`) by any number of concurrent
//! callers. Building is the only fallible step: every pattern is compiled
//! up front so that a bad rule fails at startup instead of degrading
//! search relevance silently.
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::rules::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .token_separators(" ,")
//!     .optional_literal("the")
//!     .synonym_chain(["st", "street"])
//!     .build()
//!     .unwrap();
//!
//! assert!(rules.is_optional_literal("THE"));
//! assert!(rules.synonyms().contains("st"));
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use log::info;
use regex::Regex;

use crate::analysis::char_filter::{MappingCharFilter, RemoveCharsFilter, StopPhraseCharFilter};
use crate::analysis::replacer::{Replacer, ReplacerCategory, ReplacerRule};
use crate::analysis::synonym::SynonymTable;
use crate::analysis::tokenizer::SeparatorTokenizer;
use crate::error::Result;
use crate::util::pattern::compile_alternation;

/// Default token separators when none are configured.
pub const DEFAULT_TOKEN_SEPARATORS: &str = " ";

/// All configured analysis rules.
#[derive(Clone, Debug)]
pub struct RuleSet {
    tokenizer: SeparatorTokenizer,
    remove_chars: RemoveCharsFilter,
    char_replaces: MappingCharFilter,
    stop_filter: Option<StopPhraseCharFilter>,
    optional_literals: AHashSet<String>,
    optional_pattern: Option<Regex>,
    synonyms: SynonymTable,
    street_replacers: Vec<ReplacerRule>,
    housenumber_replacers: Vec<ReplacerRule>,
}

impl RuleSet {
    /// Start building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Tokenizer splitting on the configured separators.
    pub fn tokenizer(&self) -> &SeparatorTokenizer {
        &self.tokenizer
    }

    pub fn remove_chars(&self) -> &RemoveCharsFilter {
        &self.remove_chars
    }

    /// Ordered character replacements.
    pub fn char_replaces(&self) -> &MappingCharFilter {
        &self.char_replaces
    }

    pub fn stop_filter(&self) -> Option<&StopPhraseCharFilter> {
        self.stop_filter.as_ref()
    }

    /// Check `text` against the optional literals, ignoring case.
    pub fn is_optional_literal(&self, text: &str) -> bool {
        self.optional_literals.contains(&text.to_lowercase())
    }

    pub fn optional_pattern(&self) -> Option<&Regex> {
        self.optional_pattern.as_ref()
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn street_replacers(&self) -> &[ReplacerRule] {
        &self.street_replacers
    }

    pub fn housenumber_replacers(&self) -> &[ReplacerRule] {
        &self.housenumber_replacers
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            tokenizer: SeparatorTokenizer::new(DEFAULT_TOKEN_SEPARATORS),
            remove_chars: RemoveCharsFilter::default(),
            char_replaces: MappingCharFilter::default(),
            stop_filter: None,
            optional_literals: AHashSet::new(),
            optional_pattern: None,
            synonyms: SynonymTable::new(),
            street_replacers: Vec::new(),
            housenumber_replacers: Vec::new(),
        }
    }
}

/// Builder for [`RuleSet`].
///
/// Patterns are collected as strings and compiled by [`RuleSetBuilder::build`].
#[derive(Clone, Debug)]
pub struct RuleSetBuilder {
    token_separators: String,
    remove_chars: String,
    char_replaces: Vec<(String, String)>,
    stop_patterns: Vec<String>,
    optional_literals: Vec<String>,
    optional_patterns: Vec<String>,
    synonyms: SynonymTable,
    replacers: Vec<ReplacerRule>,
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        RuleSetBuilder {
            token_separators: DEFAULT_TOKEN_SEPARATORS.to_string(),
            remove_chars: String::new(),
            char_replaces: Vec::new(),
            stop_patterns: Vec::new(),
            optional_literals: Vec::new(),
            optional_patterns: Vec::new(),
            synonyms: SynonymTable::new(),
            replacers: Vec::new(),
        }
    }

    /// Characters that break the query into tokens.
    pub fn token_separators<S: Into<String>>(mut self, separators: S) -> Self {
        self.token_separators = separators.into();
        self
    }

    /// Characters deleted from the query before tokenizing.
    pub fn remove_chars<S: Into<String>>(mut self, chars: S) -> Self {
        self.remove_chars = chars.into();
        self
    }

    /// Append a character replacement pair; pairs apply in insertion order.
    pub fn char_replace<F: Into<String>, T: Into<String>>(mut self, from: F, to: T) -> Self {
        self.char_replaces.push((from.into(), to.into()));
        self
    }

    /// Add a stop phrase pattern.
    pub fn stop_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.stop_patterns.push(pattern.into());
        self
    }

    /// Add an optional literal term (matched case-insensitively).
    pub fn optional_literal<S: Into<String>>(mut self, literal: S) -> Self {
        self.optional_literals.push(literal.into());
        self
    }

    /// Add an optional-term pattern.
    pub fn optional_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.optional_patterns.push(pattern.into());
        self
    }

    /// Add a synonym chain.
    pub fn synonym_chain<C, S>(mut self, chain: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.synonyms.add_chain(chain);
        self
    }

    /// Replace the synonym table wholesale.
    pub fn synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Add a replacer rule; its category decides which list it joins.
    pub fn replacer(mut self, rule: ReplacerRule) -> Self {
        self.replacers.push(rule);
        self
    }

    pub fn street_replacer(self, replacer: Arc<dyn Replacer>) -> Self {
        self.replacer(ReplacerRule::street(replacer))
    }

    pub fn housenumber_replacer(self, replacer: Arc<dyn Replacer>) -> Self {
        self.replacer(ReplacerRule::housenumber(replacer))
    }

    /// Compile all patterns and freeze the rule set.
    pub fn build(self) -> Result<RuleSet> {
        let stop_filter = StopPhraseCharFilter::from_patterns(&self.stop_patterns)?;
        let optional_pattern = compile_alternation(&self.optional_patterns)?;

        let (street_replacers, housenumber_replacers): (Vec<_>, Vec<_>) = self
            .replacers
            .into_iter()
            .partition(|rule| rule.category() == ReplacerCategory::Street);

        let optional_literals: AHashSet<String> = self
            .optional_literals
            .iter()
            .map(|literal| literal.to_lowercase())
            .collect();

        info!(
            "Built rule set: {} char replaces, {} stop patterns, {} optional terms, {} optional patterns, {} synonyms, {} street replacers, {} housenumber replacers",
            self.char_replaces.len(),
            self.stop_patterns.len(),
            optional_literals.len(),
            self.optional_patterns.len(),
            self.synonyms.len(),
            street_replacers.len(),
            housenumber_replacers.len(),
        );

        Ok(RuleSet {
            tokenizer: SeparatorTokenizer::new(&self.token_separators),
            remove_chars: RemoveCharsFilter::new(&self.remove_chars),
            char_replaces: MappingCharFilter::new(self.char_replaces),
            stop_filter,
            optional_literals,
            optional_pattern,
            synonyms: self.synonyms,
            street_replacers,
            housenumber_replacers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::replacer::PatternReplacer;
    use crate::analysis::tokenizer::Tokenizer;

    #[test]
    fn test_default_rule_set() {
        let rules = RuleSet::default();

        assert_eq!(rules.tokenizer().tokenize("a b"), vec!["a", "b"]);
        assert!(rules.stop_filter().is_none());
        assert!(rules.optional_pattern().is_none());
        assert!(rules.synonyms().is_empty());
        assert!(rules.street_replacers().is_empty());
        assert!(rules.housenumber_replacers().is_empty());
    }

    #[test]
    fn test_builder_partitions_replacers() {
        let replacer: Arc<dyn Replacer> = Arc::new(PatternReplacer::new(r"\d+", ["$0"]).unwrap());
        let rules = RuleSet::builder()
            .housenumber_replacer(Arc::clone(&replacer))
            .street_replacer(Arc::clone(&replacer))
            .street_replacer(replacer)
            .build()
            .unwrap();

        assert_eq!(rules.street_replacers().len(), 2);
        assert_eq!(rules.housenumber_replacers().len(), 1);
        assert!(
            rules
                .street_replacers()
                .iter()
                .all(|r| r.category() == ReplacerCategory::Street)
        );
    }

    #[test]
    fn test_builder_compiles_patterns() {
        let rules = RuleSet::builder()
            .stop_pattern("россия")
            .optional_pattern(r"\bcity of\b")
            .build()
            .unwrap();

        assert!(rules.stop_filter().is_some());
        assert!(rules.optional_pattern().unwrap().is_match("CITY OF london"));
    }

    #[test]
    fn test_invalid_pattern_fails_build() {
        assert!(RuleSet::builder().stop_pattern("(").build().is_err());
        assert!(RuleSet::builder().optional_pattern("[").build().is_err());
    }

    #[test]
    fn test_optional_literals_are_case_insensitive() {
        let rules = RuleSet::builder().optional_literal("The").build().unwrap();

        assert!(rules.is_optional_literal("the"));
        assert!(rules.is_optional_literal("THE"));
        assert!(!rules.is_optional_literal("them"));
    }

    #[test]
    fn test_rule_set_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleSet>();
    }
}
