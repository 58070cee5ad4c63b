//! Tokenizer implementations for query analysis.
//!
//! The tokenizer runs after every char filter and splits the cleaned query
//! into raw tokens. Raw tokens are plain string slices; classification
//! happens later in the annotator.
//!
//! # Examples
//!
//! ```
//! use geoquery::analysis::tokenizer::Tokenizer;
//! use geoquery::analysis::tokenizer::separator::SeparatorTokenizer;
//!
//! let tokenizer = SeparatorTokenizer::new(" ,");
//! assert_eq!(tokenizer.tokenize("main st, 12"), vec!["main", "st", "12"]);
//! ```

/// Trait for tokenizers that split text into raw tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// queries.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into non-empty raw tokens, left to right.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod separator;

pub use separator::SeparatorTokenizer;
