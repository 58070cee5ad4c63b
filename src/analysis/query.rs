//! The analyzed query and its spelling variants.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{CharFilter, MappingCharFilter, RemoveCharsFilter};
use crate::analysis::token::QToken;
use crate::util::text::capitalize;

/// Structured analysis result for one raw search string.
///
/// A `Query` is created fresh for every call and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    original: String,
    tokens: Vec<QToken>,
    spelling_variants: Vec<String>,
    removed: IndexSet<String>,
}

impl Query {
    pub fn new(
        original: String,
        tokens: Vec<QToken>,
        spelling_variants: Vec<String>,
        removed: IndexSet<String>,
    ) -> Self {
        Query {
            original,
            tokens,
            spelling_variants,
            removed,
        }
    }

    /// The input string, untouched.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Tokens in left-to-right order.
    pub fn tokens(&self) -> &[QToken] {
        &self.tokens
    }

    /// Spelling variants of the original, see [`spelling_variants`].
    pub fn spelling_variants(&self) -> &[String] {
        &self.spelling_variants
    }

    /// Stop phrases removed from the input, in first-seen order.
    pub fn removed(&self) -> &IndexSet<String> {
        &self.removed
    }

    /// Token texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(QToken::text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Deterministic debug rendering of all tokens, space-joined.
    pub fn print(&self) -> String {
        self.tokens
            .iter()
            .map(QToken::print)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

/// Build the six spelling variants of an original query string.
///
/// In order: the original; the original with char replacements applied;
/// that without `.` and `,`; the latter capitalized, upper-cased and
/// lower-cased.
pub fn spelling_variants(original: &str, replacements: &MappingCharFilter) -> Vec<String> {
    let replaced = replacements.filter(original);
    let cleaned = RemoveCharsFilter::new(".,").filter(&replaced);

    let capitalized = capitalize(&cleaned);
    let upper = cleaned.to_uppercase();
    let lower = cleaned.to_lowercase();

    vec![original.to_string(), replaced, cleaned, capitalized, upper, lower]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(raw: &[(&str, &str)]) -> MappingCharFilter {
        MappingCharFilter::new(
            raw.iter()
                .map(|(f, t)| (f.to_string(), t.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_spelling_variants_order() {
        let variants = spelling_variants("ул. Ленина, 5", &mapping(&[("ё", "е")]));

        assert_eq!(
            variants,
            vec![
                "ул. Ленина, 5",
                "ул. Ленина, 5",
                "ул Ленина 5",
                "Ул Ленина 5",
                "УЛ ЛЕНИНА 5",
                "ул ленина 5",
            ]
        );
    }

    #[test]
    fn test_spelling_variants_apply_replacements() {
        let variants = spelling_variants("Щёлково", &mapping(&[("ё", "е")]));

        assert_eq!(variants[0], "Щёлково");
        assert_eq!(variants[1], "Щелково");
    }

    #[test]
    fn test_spelling_variants_of_empty_input() {
        let variants = spelling_variants("", &MappingCharFilter::default());
        assert_eq!(variants.len(), 6);
        assert!(variants.iter().all(String::is_empty));
    }

    #[test]
    fn test_query_print() {
        let query = Query::new(
            "the main st".to_string(),
            vec![
                QToken::new("the").mark_optional(),
                QToken::new("main"),
                QToken::new("st").with_variants(vec!["street".into(), "str".into()]),
            ],
            Vec::new(),
            IndexSet::new(),
        );

        assert_eq!(query.print(), "opt(the) main [street|str]");
        assert_eq!(query.to_string(), query.print());
        assert_eq!(query.texts(), vec!["the", "main", "st"]);
    }
}
