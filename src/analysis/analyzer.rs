//! Query analyzers.
//!
//! An analyzer turns one raw search string into a [`Query`]. Analysis is a
//! pure, synchronous computation over an immutable
//! [`RuleSet`](crate::analysis::rules::RuleSet): it performs no I/O, never
//! fails and keeps all scratch state local to the call, so one analyzer can
//! be shared across threads.
//!
//! ```text
//! raw text
//!   → lowercase + char replacements
//!   → stop phrase removal
//!   → replacer groups → GROUP<n> placeholders
//!   → optional-term pre-scan
//!   → removable char strip
//!   → tokenize
//!   → annotate tokens (placeholders, synonyms, flags)
//!   → Query
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use geoquery::analysis::analyzer::QueryAnalyzer;
//! use geoquery::analysis::analyzer::address::AddressQueryAnalyzer;
//! use geoquery::analysis::rules::RuleSet;
//!
//! let rules = RuleSet::builder().synonym_chain(["str", "street"]).build().unwrap();
//! let analyzer = AddressQueryAnalyzer::new(Arc::new(rules));
//!
//! let query = analyzer.analyze("Main Str 12");
//! assert_eq!(query.texts(), vec!["main", "str", "12"]);
//! assert_eq!(query.print(), "main [street] 12");
//!
//! assert!(analyzer.get_query(None).is_none());
//! ```

use crate::analysis::query::Query;

/// Trait for analyzers that convert a raw search string into a [`Query`].
pub trait QueryAnalyzer: Send + Sync {
    /// Analyze one search string.
    fn analyze(&self, text: &str) -> Query;

    /// Analyze an optional search string; absent input yields no query.
    fn get_query(&self, text: Option<&str>) -> Option<Query> {
        text.map(|text| self.analyze(text))
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod address;
pub mod annotate;

pub use address::AddressQueryAnalyzer;
pub use annotate::TokenAnnotator;
