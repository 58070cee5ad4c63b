//! Replacer rules: pattern-driven fuzzy variants for address parts.
//!
//! A replacer locates address-relevant substrings (street names with their
//! type, housenumbers with letters or fractions) and proposes alternate
//! spellings for them. Replacers are grouped by [`ReplacerCategory`]; the
//! category decides how results from several rules are merged into one
//! [`GroupTable`](group::GroupTable).
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::replacer::Replacer;
//! use geoquery::analysis::replacer::pattern::PatternReplacer;
//!
//! let replacer = PatternReplacer::new(r"(\w+) str\b", ["${1} street"]).unwrap();
//! let groups = replacer.replace_groups("123 main str");
//!
//! assert_eq!(groups["main str"], vec!["main street".to_string()]);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Matched substring → proposed variants, in match order.
pub type ReplaceGroups = IndexMap<String, Vec<String>>;

/// The kind of address part a replacer recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplacerCategory {
    /// Street names; later rules overwrite earlier results for the same key.
    Street,
    /// Housenumbers; results are merged into existing keys.
    Housenumber,
}

impl fmt::Display for ReplacerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacerCategory::Street => write!(f, "street"),
            ReplacerCategory::Housenumber => write!(f, "housenumber"),
        }
    }
}

/// Trait for rules that propose variants for matched substrings.
///
/// Implementations must be deterministic and return non-overlapping
/// matches, left to right.
pub trait Replacer: Send + Sync + fmt::Debug {
    /// Find every match in `text` and the variants proposed for it.
    fn replace_groups(&self, text: &str) -> ReplaceGroups;

    /// Get the name of this replacer (for debugging and logging).
    fn name(&self) -> &str;
}

/// A replacer tagged with its category.
#[derive(Clone, Debug)]
pub struct ReplacerRule {
    category: ReplacerCategory,
    replacer: Arc<dyn Replacer>,
}

impl ReplacerRule {
    pub fn new(category: ReplacerCategory, replacer: Arc<dyn Replacer>) -> Self {
        Self { category, replacer }
    }

    pub fn street(replacer: Arc<dyn Replacer>) -> Self {
        Self::new(ReplacerCategory::Street, replacer)
    }

    pub fn housenumber(replacer: Arc<dyn Replacer>) -> Self {
        Self::new(ReplacerCategory::Housenumber, replacer)
    }

    pub fn category(&self) -> ReplacerCategory {
        self.category
    }

    pub fn replacer(&self) -> &Arc<dyn Replacer> {
        &self.replacer
    }

    /// Run the wrapped replacer.
    pub fn replace_groups(&self, text: &str) -> ReplaceGroups {
        self.replacer.replace_groups(text)
    }
}

pub mod group;
pub mod pattern;

pub use group::{AliasTable, GroupTable, RawToken, Substitution};
pub use pattern::PatternReplacer;
