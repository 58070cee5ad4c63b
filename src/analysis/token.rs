//! Query token types.
//!
//! A [`QToken`] is one classified unit of an analyzed query. Besides its
//! canonical text it carries fuzzy variants (alternate spellings proposed
//! by replacer rules or synonym chains) and flags the query builder uses to
//! decide how the token participates in the backend request.
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::token::QToken;
//!
//! let token = QToken::new("st")
//!     .with_variants(vec!["street".to_string()])
//!     .mark_street();
//!
//! assert!(token.is_fuzzied());
//! assert!(token.is_street_matched());
//! assert_eq!(token.print(), "[street]");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One analyzed query token.
///
/// Tokens are assembled with the consuming `with_*` / `mark_*` methods and
/// never change afterwards. Flags can only be switched on; in particular a
/// token marked optional stays optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QToken {
    text: String,
    variants: Vec<String>,
    has_numbers: bool,
    numbers_only: bool,
    optional: bool,
    matched_housenumber: bool,
    matched_street: bool,
}

impl QToken {
    /// Create a plain token without variants or flags.
    pub fn new<S: Into<String>>(text: S) -> Self {
        QToken {
            text: text.into(),
            variants: Vec::new(),
            has_numbers: false,
            numbers_only: false,
            optional: false,
            matched_housenumber: false,
            matched_street: false,
        }
    }

    /// Set the fuzzy variants.
    pub fn with_variants(mut self, variants: Vec<String>) -> Self {
        self.variants = variants;
        self
    }

    /// Set the numeric classification.
    pub fn with_number_flags(mut self, has_numbers: bool, numbers_only: bool) -> Self {
        self.has_numbers = has_numbers;
        self.numbers_only = numbers_only;
        self
    }

    /// Mark this token as optional.
    pub fn mark_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark this token as produced by a housenumber rule.
    pub fn mark_housenumber(mut self) -> Self {
        self.matched_housenumber = true;
        self
    }

    /// Mark this token as produced by a street rule or synonym chain.
    pub fn mark_street(mut self) -> Self {
        self.matched_street = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// True when the token carries at least one variant.
    pub fn is_fuzzied(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn has_numbers(&self) -> bool {
        self.has_numbers
    }

    pub fn is_numbers_only(&self) -> bool {
        self.numbers_only
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_housenumber_matched(&self) -> bool {
        self.matched_housenumber
    }

    pub fn is_street_matched(&self) -> bool {
        self.matched_street
    }

    /// Debug rendering: `opt(text)`, `[v1|v2]` or the plain text.
    pub fn print(&self) -> String {
        if self.optional {
            return format!("opt({})", self.text);
        }
        if self.is_fuzzied() {
            return format!("[{}]", self.variants.join("|"));
        }
        self.text.clone()
    }
}

impl fmt::Display for QToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = QToken::new("main");
        assert_eq!(token.text(), "main");
        assert!(token.variants().is_empty());
        assert!(!token.is_fuzzied());
        assert!(!token.has_numbers());
        assert!(!token.is_numbers_only());
        assert!(!token.is_optional());
        assert!(!token.is_housenumber_matched());
        assert!(!token.is_street_matched());
    }

    #[test]
    fn test_token_flags() {
        let token = QToken::new("12a")
            .with_number_flags(true, false)
            .mark_housenumber()
            .mark_optional();

        assert!(token.has_numbers());
        assert!(!token.is_numbers_only());
        assert!(token.is_housenumber_matched());
        assert!(token.is_optional());
    }

    #[test]
    fn test_token_print() {
        assert_eq!(QToken::new("main").print(), "main");
        assert_eq!(QToken::new("the").mark_optional().print(), "opt(the)");

        let fuzzied = QToken::new("st").with_variants(vec!["street".into(), "str".into()]);
        assert_eq!(fuzzied.print(), "[street|str]");

        // Optional wins over variants.
        let both = fuzzied.mark_optional();
        assert_eq!(both.print(), "opt(st)");
    }

    #[test]
    fn test_token_display() {
        let token = QToken::new("lenina").with_variants(vec!["ленина".into()]);
        assert_eq!(format!("{token}"), "lenina");
    }

    #[test]
    fn test_token_serde() {
        let token = QToken::new("12").with_number_flags(true, true);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"numbers_only\":true"));

        let back: QToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
