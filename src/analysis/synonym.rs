//! Synonym chains for street-name terms.
//!
//! A chain declares words that may replace each other, e.g. `st = street =
//! str`. The table stores each chain as a closed cycle of successor links,
//! so walking from any member visits every other member:
//!
//! ```text
//! st = street = str
//!
//!   st ──> street ──> str
//!    ^                 │
//!    └─────────────────┘
//! ```
//!
//! A word that appears in several chains keeps the successor from the
//! chain declared last. Resolution is bounded by [`MAX_SYNONYM_VARIANTS`]
//! so malformed data can never loop forever.
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::synonym::SynonymTable;
//!
//! let table = SynonymTable::from_lines("st = street = str\n# comment\n");
//! let mut variants = table.resolve("street");
//! variants.sort();
//!
//! assert_eq!(variants, vec!["st".to_string(), "str".to_string()]);
//! ```

use ahash::AHashMap;

/// Upper bound on the number of variants produced for one word.
pub const MAX_SYNONYM_VARIANTS: usize = 10;

/// Directed successor table built from synonym chains.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    successors: AHashMap<String, String>,
}

impl SynonymTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from chains, in declaration order.
    ///
    /// Members are trimmed and lowercased; blank members are dropped and
    /// chains with fewer than two members are ignored.
    pub fn from_chains<I, C, S>(chains: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for chain in chains {
            table.add_chain(chain);
        }
        table
    }

    /// Build a table from `.syn` style lines: `a = b = c`, `#` comments.
    pub fn from_lines(text: &str) -> Self {
        Self::from_chains(text.lines().filter_map(parse_chain_line))
    }

    /// Add one chain, closing it into a cycle.
    pub fn add_chain<C, S>(&mut self, chain: C)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members: Vec<String> = chain
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if members.len() < 2 {
            return;
        }

        for pair in members.windows(2) {
            self.successors.insert(pair[0].clone(), pair[1].clone());
        }
        // Close the cycle: last -> first.
        if let (Some(last), Some(first)) = (members.last(), members.first()) {
            self.successors.insert(last.clone(), first.clone());
        }
    }

    /// Get the direct successor of `word`.
    pub fn successor(&self, word: &str) -> Option<&str> {
        self.successors.get(word).map(String::as_str)
    }

    /// Check whether `word` is a member of any chain.
    pub fn contains(&self, word: &str) -> bool {
        self.successors.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Resolve the synonym closure of `word`.
    ///
    /// Walks the successor links starting after `word` until the walk comes
    /// back to `word`, reaches a repeat, or has produced
    /// [`MAX_SYNONYM_VARIANTS`] variants. Unknown words resolve to nothing.
    pub fn resolve(&self, word: &str) -> Vec<String> {
        let Some(first) = self.successor(word) else {
            return Vec::new();
        };

        let mut result = vec![first.to_string()];
        let mut current = first;

        while result.len() < MAX_SYNONYM_VARIANTS {
            let Some(next) = self.successor(current) else {
                break;
            };
            if next == word || result.iter().any(|v| v == next) {
                break;
            }
            result.push(next.to_string());
            current = next;
        }

        result
    }
}

/// Parse one synonym line into its chain members.
///
/// Returns `None` for comments, blank lines and lines with fewer than two
/// non-blank members.
pub fn parse_chain_line(line: &str) -> Option<Vec<String>> {
    if line.starts_with('#') || line.trim().is_empty() {
        return None;
    }

    let members: Vec<String> = line
        .split('=')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    (members.len() >= 2).then_some(members)
}
