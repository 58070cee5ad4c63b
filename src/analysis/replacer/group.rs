//! Group table and placeholder substitution.
//!
//! Replacer matches often span several words ("main str"), which the
//! tokenizer would otherwise split apart. Before tokenizing, every matched
//! substring is swapped for an alias `GROUP<n>`. Aliases are kept as
//! separate segments of the working text, so each raw token knows which
//! alias it starts with and the annotator resolves it by index.
//!
//! Merge policy across rules:
//!
//! - street rules run first, in order; a key produced again by a later
//!   street rule has its variants replaced wholesale;
//! - housenumber rules run next, in order; a key that already exists has
//!   the new variants appended (ordered union), otherwise it is inserted.
//!
//! Aliases are numbered from zero in table order, shared across both
//! categories. Later keys only replace text that is still literal input, so
//! a digit key never rewrites an alias inserted before it, and literal text
//! that looks like an alias is never resolved.

use ahash::AHashSet;
use indexmap::IndexMap;

use super::{ReplaceGroups, ReplacerCategory, ReplacerRule};
use crate::analysis::char_filter::CharFilter;
use crate::analysis::tokenizer::SeparatorTokenizer;

/// Prefix of every placeholder alias.
pub const ALIAS_PREFIX: &str = "GROUP";

/// Per-query table of matched substrings and their variants.
#[derive(Clone, Debug, Default)]
pub struct GroupTable {
    groups: IndexMap<String, Vec<String>>,
    street_keys: AHashSet<String>,
    housenumber_keys: AHashSet<String>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all street rules, then all housenumber rules, over `text`.
    pub fn collect(text: &str, street: &[ReplacerRule], housenumber: &[ReplacerRule]) -> Self {
        let mut table = Self::new();
        for rule in street.iter().chain(housenumber) {
            table.add(rule.category(), rule.replace_groups(text));
        }
        table
    }

    /// Merge the output of one rule invocation according to `category`.
    pub fn add(&mut self, category: ReplacerCategory, groups: ReplaceGroups) {
        for (key, variants) in groups {
            match category {
                ReplacerCategory::Street => {
                    self.street_keys.insert(key.clone());
                    self.groups.insert(key, variants);
                }
                ReplacerCategory::Housenumber => {
                    self.housenumber_keys.insert(key.clone());
                    let existing = self.groups.entry(key).or_default();
                    for variant in variants {
                        if !existing.contains(&variant) {
                            existing.push(variant);
                        }
                    }
                }
            }
        }
    }

    /// Variants recorded for `key`.
    pub fn variants(&self, key: &str) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn is_street(&self, key: &str) -> bool {
        self.street_keys.contains(key)
    }

    pub fn is_housenumber(&self, key: &str) -> bool {
        self.housenumber_keys.contains(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Replace every occurrence of each key in `text` with an alias.
    ///
    /// Keys are processed in table order, each against the literal text left
    /// over by the previous substitutions.
    pub fn substitute(&self, text: &str) -> Substitution {
        let mut segments = vec![Segment::Text(text.to_string())];
        let mut aliases = AliasTable::default();

        for (index, key) in self.groups.keys().enumerate() {
            if !key.is_empty() {
                segments = segments
                    .into_iter()
                    .flat_map(|segment| segment.split_on(key, index))
                    .collect();
            }
            aliases.push(key.clone());
        }

        Substitution { segments, aliases }
    }
}

/// Piece of the working text during substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Alias(usize),
}

impl Segment {
    fn split_on(self, key: &str, index: usize) -> Vec<Segment> {
        match self {
            Segment::Text(text) if text.contains(key) => {
                let mut parts = Vec::new();
                for (i, piece) in text.split(key).enumerate() {
                    if i > 0 {
                        parts.push(Segment::Alias(index));
                    }
                    if !piece.is_empty() {
                        parts.push(Segment::Text(piece.to_string()));
                    }
                }
                parts
            }
            other => vec![other],
        }
    }
}

/// Working text after placeholder substitution.
///
/// Aliases stay separate segments; their index is never parsed back out of
/// the text.
#[derive(Clone, Debug)]
pub struct Substitution {
    segments: Vec<Segment>,
    aliases: AliasTable,
}

impl Substitution {
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Render the working text, each alias written as `" " + GROUP<n>`.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Alias(index) => format!(" {}", AliasTable::label(*index)),
            })
            .collect()
    }

    /// Split into raw tokens.
    ///
    /// `remove` runs over literal text only. An alias always starts a new
    /// token; literal text following it up to the next separator becomes
    /// the token's tail.
    pub fn tokenize(
        &self,
        tokenizer: &SeparatorTokenizer,
        remove: &dyn CharFilter,
    ) -> Vec<RawToken> {
        let mut tokens = Vec::new();
        let mut current = RawToken::default();

        for segment in &self.segments {
            match segment {
                Segment::Alias(index) => {
                    current.flush_into(&mut tokens);
                    current.alias = Some(*index);
                }
                Segment::Text(text) => {
                    for c in remove.filter(text).chars() {
                        if tokenizer.is_separator(c) {
                            current.flush_into(&mut tokens);
                        } else {
                            current.text.push(c);
                        }
                    }
                }
            }
        }
        current.flush_into(&mut tokens);

        tokens
    }
}

/// A token before annotation: an optional alias plus literal text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawToken {
    alias: Option<usize>,
    text: String,
}

impl RawToken {
    /// A token of plain input text.
    pub fn literal<S: Into<String>>(text: S) -> Self {
        RawToken {
            alias: None,
            text: text.into(),
        }
    }

    /// A token standing for alias `index`, followed by `tail`.
    pub fn placeholder<S: Into<String>>(index: usize, tail: S) -> Self {
        RawToken {
            alias: Some(index),
            text: tail.into(),
        }
    }

    pub fn alias(&self) -> Option<usize> {
        self.alias
    }

    /// The literal text; for a placeholder, the tail after the alias.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn flush_into(&mut self, tokens: &mut Vec<RawToken>) {
        let token = std::mem::take(self);
        if token.alias.is_some() || !token.text.is_empty() {
            tokens.push(token);
        }
    }
}

/// Alias → matched substring, for one query.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    keys: Vec<String>,
}

impl AliasTable {
    fn push(&mut self, key: String) {
        self.keys.push(key);
    }

    /// The label of alias `index`, `GROUP<index>`.
    pub fn label(index: usize) -> String {
        format!("{ALIAS_PREFIX}{index}")
    }

    /// Matched substring of alias `index`.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Look up the matched substring by exact label.
    pub fn get(&self, label: &str) -> Option<&str> {
        let index: usize = label.strip_prefix(ALIAS_PREFIX)?.parse().ok()?;
        if Self::label(index) != label {
            return None;
        }
        self.key(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
