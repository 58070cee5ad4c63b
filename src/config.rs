//! Rule set configuration.
//!
//! [`RuleSetConfig`] is the serializable shape a rule loader produces. It
//! keeps every rule as plain text; [`RuleSetConfig::build`] compiles it into
//! an immutable [`RuleSet`]. Any malformed entry aborts the build so a
//! service never starts with a partial rule set.
//!
//! Term lists follow the line-oriented `.terms` format: one entry per line,
//! blank lines and `#` comments ignored. For optional terms a leading `~`
//! marks a regex pattern, anything else is a literal. Synonym lines declare
//! a chain `a = b = c`.
//!
//! # Examples
//!
//! ```
//! use geoquery::config::RuleSetConfig;
//!
//! let config = RuleSetConfig::from_json_str(r#"{
//!     "token_separators": " ,",
//!     "char_replaces": [["ё", "е"]],
//!     "optional_terms": ["the", "~\\bcity of\\b"],
//!     "synonyms": ["st = street"],
//!     "street_replacers": [{"pattern": "(\\w+) str\\b", "variants": ["${1} street"]}]
//! }"#).unwrap();
//!
//! let rules = config.build().unwrap();
//! assert!(rules.is_optional_literal("the"));
//! assert_eq!(rules.street_replacers().len(), 1);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::replacer::{PatternReplacer, ReplacerCategory, ReplacerRule};
use crate::analysis::rules::{DEFAULT_TOKEN_SEPARATORS, RuleSet};
use crate::analysis::synonym::parse_chain_line;
use crate::error::{GeoQueryError, Result};

/// Marks a pattern entry in a term list.
pub const PATTERN_MARKER: char = '~';

/// One pattern-driven replacer rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacerConfig {
    /// Regex locating the substring to replace
    pub pattern: String,
    /// Variant templates; may reference captures as `$1` or `${name}`
    #[serde(default)]
    pub variants: Vec<String>,
}

/// Serializable description of a complete rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// Characters that break the query into terms
    pub token_separators: String,
    /// Characters removed from the query
    pub remove_chars: String,
    /// Ordered char-level replacements, like `ё` → `е` or `ß` → `ss`
    pub char_replaces: Vec<(String, String)>,
    /// Stop phrase patterns
    pub stop_terms: Vec<String>,
    /// Optional literals, or patterns when prefixed with `~`
    pub optional_terms: Vec<String>,
    /// Synonym chain lines
    pub synonyms: Vec<String>,
    /// Street replacers, in application order
    pub street_replacers: Vec<ReplacerConfig>,
    /// Housenumber replacers, in application order
    pub housenumber_replacers: Vec<ReplacerConfig>,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        RuleSetConfig {
            token_separators: DEFAULT_TOKEN_SEPARATORS.to_string(),
            remove_chars: String::new(),
            char_replaces: Vec::new(),
            stop_terms: Vec::new(),
            optional_terms: Vec::new(),
            synonyms: Vec::new(),
            street_replacers: Vec::new(),
            housenumber_replacers: Vec::new(),
        }
    }
}

impl RuleSetConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GeoQueryError::source_error(
                &path.display().to_string(),
                format!("failed to read rule configuration: {e}"),
            )
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            GeoQueryError::source_error(
                &path.display().to_string(),
                format!("failed to parse rule configuration: {e}"),
            )
        })?;

        debug!(
            "Loaded rule configuration from {}: {} stop terms, {} optional terms, {} synonym lines",
            path.display(),
            config.stop_terms.len(),
            config.optional_terms.len(),
            config.synonyms.len(),
        );

        Ok(config)
    }

    /// Compile this configuration into an immutable rule set.
    pub fn build(&self) -> Result<RuleSet> {
        let mut builder = RuleSet::builder()
            .token_separators(self.token_separators.as_str())
            .remove_chars(self.remove_chars.as_str());

        for (from, to) in &self.char_replaces {
            builder = builder.char_replace(from.as_str(), to.as_str());
        }

        for term in &self.stop_terms {
            let pattern = term.strip_prefix(PATTERN_MARKER).unwrap_or(term);
            builder = builder.stop_pattern(pattern);
        }

        for term in &self.optional_terms {
            builder = match term.strip_prefix(PATTERN_MARKER) {
                Some(pattern) => builder.optional_pattern(pattern),
                None => builder.optional_literal(term.as_str()),
            };
        }

        for chain in self.synonyms.iter().filter_map(|line| parse_chain_line(line)) {
            builder = builder.synonym_chain(chain);
        }

        for rule in self.replacer_rules()? {
            builder = builder.replacer(rule);
        }

        builder.build()
    }

    fn replacer_rules(&self) -> Result<Vec<ReplacerRule>> {
        let street = self
            .street_replacers
            .iter()
            .map(|c| (ReplacerCategory::Street, c));
        let housenumber = self
            .housenumber_replacers
            .iter()
            .map(|c| (ReplacerCategory::Housenumber, c));

        street
            .chain(housenumber)
            .map(|(category, config)| {
                let replacer =
                    PatternReplacer::new(&config.pattern, config.variants.iter().cloned())
                        .map_err(|e| {
                            GeoQueryError::config(format!("{category} replacer: {e}"))
                        })?;
                Ok(ReplacerRule::new(category, Arc::new(replacer)))
            })
            .collect()
    }
}

/// Parse a `.terms` file body into its entries.
///
/// Blank lines and `#` comments are skipped; duplicates keep their first
/// position.
pub fn parse_terms(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Read and parse a `.terms` file.
pub fn load_terms_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let terms = parse_terms(&fs::read_to_string(path)?);
    debug!("Read {} terms from {}", terms.len(), path.display());
    Ok(terms)
}
