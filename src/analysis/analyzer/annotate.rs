//! Token annotation.
//!
//! Turns raw tokens into [`QToken`]s: resolves placeholder tokens back to
//! the replacer match they stand for, attaches synonym variants and
//! computes the numeric and optional flags.

use ahash::AHashSet;
use regex::Regex;

use crate::analysis::replacer::{AliasTable, GroupTable, RawToken};
use crate::analysis::rules::RuleSet;
use crate::analysis::token::QToken;
use crate::analysis::tokenizer::Tokenizer;
use crate::util::text::{is_blank, strip_digits};

/// Non-numeric tokens shorter than this many characters are optional.
pub const MIN_REQUIRED_LENGTH: usize = 3;

/// Collect the sub-words of every optional-pattern match in `text`.
pub fn scan_optional_tokens(
    pattern: &Regex,
    text: &str,
    tokenizer: &dyn Tokenizer,
) -> AHashSet<String> {
    pattern
        .find_iter(text)
        .filter(|m| !m.is_empty())
        .flat_map(|m| tokenizer.tokenize(m.as_str()))
        .map(str::to_string)
        .collect()
}

/// Annotates raw tokens of one query.
///
/// Borrows the per-query scratch state (group table, aliases, optional
/// sub-words) for the duration of the call.
#[derive(Debug)]
pub struct TokenAnnotator<'a> {
    rules: &'a RuleSet,
    groups: &'a GroupTable,
    aliases: &'a AliasTable,
    matched_opt_tokens: &'a AHashSet<String>,
}

impl<'a> TokenAnnotator<'a> {
    pub fn new(
        rules: &'a RuleSet,
        groups: &'a GroupTable,
        aliases: &'a AliasTable,
        matched_opt_tokens: &'a AHashSet<String>,
    ) -> Self {
        TokenAnnotator {
            rules,
            groups,
            aliases,
            matched_opt_tokens,
        }
    }

    /// Build the final token for one raw token.
    pub fn annotate(&self, raw: &RawToken) -> QToken {
        let mut text = raw.text().to_string();
        let mut variants = Vec::new();
        let mut matched_housenumber = false;
        let mut matched_street = false;

        if let Some(index) = raw.alias() {
            let tail = raw.text();
            match self.aliases.key(index) {
                Some(key) => {
                    text = format!("{key}{tail}");
                    variants = self
                        .groups
                        .variants(key)
                        .unwrap_or_default()
                        .iter()
                        .map(|variant| format!("{variant}{tail}"))
                        .collect();
                    matched_housenumber = self.groups.is_housenumber(key);
                    matched_street = self.groups.is_street(key);
                }
                // Unknown aliases leave the token as literal text.
                None => text = format!("{}{tail}", AliasTable::label(index)),
            }
        }

        let synonyms = self.rules.synonyms();
        if synonyms.contains(&text) {
            matched_street = true;
            variants.extend(synonyms.resolve(&text));
        }

        let without_numbers = strip_digits(&text);
        let has_numbers = without_numbers.len() != text.len();
        let numbers_only = is_blank(&without_numbers);

        let optional = self.rules.is_optional_literal(&text)
            || (!has_numbers && without_numbers.chars().count() < MIN_REQUIRED_LENGTH)
            || self.matched_opt_tokens.contains(&text)
            || variants.iter().any(|v| self.rules.is_optional_literal(v));

        let mut token = QToken::new(text)
            .with_variants(variants)
            .with_number_flags(has_numbers, numbers_only);
        if optional {
            token = token.mark_optional();
        }
        if matched_housenumber {
            token = token.mark_housenumber();
        }
        if matched_street {
            token = token.mark_street();
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::analysis::replacer::ReplacerCategory;
    use crate::analysis::tokenizer::SeparatorTokenizer;

    fn street_groups(entries: &[(&str, &[&str])]) -> GroupTable {
        let mut table = GroupTable::new();
        let groups: IndexMap<String, Vec<String>> = entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect();
        table.add(ReplacerCategory::Street, groups);
        table
    }

    #[test]
    fn test_plain_token_flags() {
        let rules = RuleSet::default();
        let (groups, aliases, opt) = (GroupTable::new(), AliasTable::default(), AHashSet::new());
        let annotator = TokenAnnotator::new(&rules, &groups, &aliases, &opt);

        let token = annotator.annotate(&RawToken::literal("12"));
        assert!(token.has_numbers());
        assert!(token.is_numbers_only());
        assert!(!token.is_optional());

        let token = annotator.annotate(&RawToken::literal("12a"));
        assert!(token.has_numbers());
        assert!(!token.is_numbers_only());
        assert!(!token.is_optional());

        let token = annotator.annotate(&RawToken::literal("house"));
        assert!(!token.has_numbers());
        assert!(!token.is_optional());
    }

    #[test]
    fn test_short_tokens_are_optional() {
        let rules = RuleSet::default();
        let (groups, aliases, opt) = (GroupTable::new(), AliasTable::default(), AHashSet::new());
        let annotator = TokenAnnotator::new(&rules, &groups, &aliases, &opt);

        assert!(annotator.annotate(&RawToken::literal("of")).is_optional());
        // Multibyte characters count once.
        assert!(annotator.annotate(&RawToken::literal("ул")).is_optional());
        assert!(!annotator.annotate(&RawToken::literal("ул.")).is_optional());
        assert!(!annotator.annotate(&RawToken::literal("улица")).is_optional());
        // Digits keep a short token required.
        assert!(!annotator.annotate(&RawToken::literal("5")).is_optional());
    }

    #[test]
    fn test_placeholder_resolution_with_tail() {
        let rules = RuleSet::default();
        let groups = street_groups(&[("main str", &["main street"])]);
        let substitution = groups.substitute("main str");
        let opt = AHashSet::new();
        let annotator = TokenAnnotator::new(&rules, &groups, substitution.aliases(), &opt);

        let token = annotator.annotate(&RawToken::placeholder(0, "asse"));
        assert_eq!(token.text(), "main strasse");
        assert_eq!(token.variants(), &["main streetasse".to_string()]);
        assert!(token.is_street_matched());
        assert!(!token.is_housenumber_matched());
    }

    #[test]
    fn test_unknown_alias_stays_literal() {
        let rules = RuleSet::default();
        let groups = GroupTable::new();
        let aliases = AliasTable::default();
        let opt = AHashSet::new();
        let annotator = TokenAnnotator::new(&rules, &groups, &aliases, &opt);

        let token = annotator.annotate(&RawToken::placeholder(7, ""));
        assert_eq!(token.text(), "GROUP7");
        assert!(token.variants().is_empty());
        assert!(!token.is_street_matched());
    }

    #[test]
    fn test_literal_alias_text_is_not_resolved() {
        let rules = RuleSet::default();
        let groups = street_groups(&[("main str", &["main street"])]);
        let substitution = groups.substitute("main str");
        let opt = AHashSet::new();
        let annotator = TokenAnnotator::new(&rules, &groups, substitution.aliases(), &opt);

        let token = annotator.annotate(&RawToken::literal("GROUP0"));
        assert_eq!(token.text(), "GROUP0");
        assert!(token.variants().is_empty());
        assert!(!token.is_street_matched());
    }

    #[test]
    fn test_synonyms_and_optional_variants() {
        let rules = RuleSet::builder()
            .synonym_chain(["saint", "st"])
            .optional_literal("st")
            .build()
            .unwrap();
        let (groups, aliases, opt) = (GroupTable::new(), AliasTable::default(), AHashSet::new());
        let annotator = TokenAnnotator::new(&rules, &groups, &aliases, &opt);

        let token = annotator.annotate(&RawToken::literal("saint"));
        assert_eq!(token.variants(), &["st".to_string()]);
        assert!(token.is_street_matched());
        // Optional because a variant is an optional literal.
        assert!(token.is_optional());
    }

    #[test]
    fn test_matched_optional_sub_words() {
        let rules = RuleSet::default();
        let (groups, aliases) = (GroupTable::new(), AliasTable::default());
        let pattern = Regex::new(r"(?i)city of \w+").unwrap();
        let opt = scan_optional_tokens(&pattern, "the city of london", &SeparatorTokenizer::new(" "));

        assert!(opt.contains("city"));
        assert!(opt.contains("london"));
        assert!(!opt.contains("the"));

        let annotator = TokenAnnotator::new(&rules, &groups, &aliases, &opt);
        assert!(annotator.annotate(&RawToken::literal("london")).is_optional());
        assert!(!annotator.annotate(&RawToken::literal("paris")).is_optional());
    }
}
