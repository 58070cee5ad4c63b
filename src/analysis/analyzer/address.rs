//! Address query analyzer.

use std::sync::Arc;

use ahash::AHashSet;
use indexmap::IndexSet;
use log::trace;

use super::QueryAnalyzer;
use super::annotate::{TokenAnnotator, scan_optional_tokens};
use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter};
use crate::analysis::query::{Query, spelling_variants};
use crate::analysis::replacer::GroupTable;
use crate::analysis::rules::RuleSet;

/// Rule-driven analyzer for free-text address queries.
///
/// Holds only a shared reference to its [`RuleSet`]; cloning the analyzer
/// is cheap and every clone sees the same rules.
#[derive(Clone, Debug)]
pub struct AddressQueryAnalyzer {
    rules: Arc<RuleSet>,
    lowercase: LowercaseCharFilter,
}

impl AddressQueryAnalyzer {
    /// Create an analyzer over a published rule set.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        AddressQueryAnalyzer {
            rules,
            lowercase: LowercaseCharFilter::new(),
        }
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Lowercase `text` and apply the character replacements in order.
    pub fn normalize(&self, text: &str) -> String {
        self.rules
            .char_replaces()
            .filter(&self.lowercase.filter(text))
    }
}

impl QueryAnalyzer for AddressQueryAnalyzer {
    fn analyze(&self, text: &str) -> Query {
        let rules = self.rules.as_ref();

        let normalized = self.normalize(text);

        let (stripped, removed) = match rules.stop_filter() {
            Some(stop_filter) => stop_filter.strip(&normalized),
            None => (normalized, IndexSet::new()),
        };

        let groups = GroupTable::collect(
            &stripped,
            rules.street_replacers(),
            rules.housenumber_replacers(),
        );
        let substitution = groups.substitute(&stripped);

        let matched_opt_tokens = match rules.optional_pattern() {
            Some(pattern) => {
                scan_optional_tokens(pattern, &substitution.text(), rules.tokenizer())
            }
            None => AHashSet::new(),
        };

        let annotator = TokenAnnotator::new(
            rules,
            &groups,
            substitution.aliases(),
            &matched_opt_tokens,
        );
        let tokens = substitution
            .tokenize(rules.tokenizer(), rules.remove_chars())
            .iter()
            .map(|raw| annotator.annotate(raw))
            .collect();

        let query = Query::new(
            text.to_string(),
            tokens,
            spelling_variants(text, rules.char_replaces()),
            removed,
        );

        trace!("Query: {}", query.print());

        query
    }

    fn name(&self) -> &'static str {
        "address"
    }
}
