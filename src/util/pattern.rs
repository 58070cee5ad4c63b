//! Alternation pattern compilation.
//!
//! Stop phrases and optional-term patterns are each compiled into a single
//! case-insensitive regex `(?i)(p1)|(p2)|...`. Alternatives keep their
//! configured order, so leftmost-first matching prefers earlier patterns
//! when two of them start at the same position.

use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Compile `patterns` into one case-insensitive alternation.
///
/// Duplicate and empty patterns are dropped; returns `None` when nothing is
/// left to match.
pub fn compile_alternation<I, S>(patterns: I) -> Result<Option<Regex>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let patterns: IndexSet<String> = patterns
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if patterns.is_empty() {
        return Ok(None);
    }

    let alternation = patterns
        .iter()
        .map(|p| format!("({p})"))
        .collect::<Vec<_>>()
        .join("|");

    let regex = RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()?;

    Ok(Some(regex))
}
