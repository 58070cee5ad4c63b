//! Char filter implementations for text normalization.
//!
//! Char filters operate on the raw query string before it is split into
//! tokens. The query analyzer chains them in a fixed order: lowercasing,
//! ordered character replacement, stop-phrase removal and finally removal
//! of configured characters.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Lowercases the whole string
//! - [`mapping::MappingCharFilter`] - Ordered substring replacement (`ё` → `е`, `ß` → `ss`)
//! - [`stop::StopPhraseCharFilter`] - Removes configured stop phrases and records them
//! - [`remove::RemoveCharsFilter`] - Deletes every character of a set
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::char_filter::CharFilter;
//! use geoquery::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::new(vec![("ё".to_string(), "е".to_string())]);
//! assert_eq!(filter.filter("ёлка"), "елка");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod mapping;
pub mod remove;
pub mod stop;

pub use lowercase::LowercaseCharFilter;
pub use mapping::MappingCharFilter;
pub use remove::RemoveCharsFilter;
pub use stop::StopPhraseCharFilter;
