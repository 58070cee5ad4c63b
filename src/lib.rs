//! # geoquery
//!
//! Query analysis for address and geocoding search.
//!
//! Turns one raw free-text search string into a structured, annotated token
//! sequence that a downstream query builder translates into a search
//! backend request.
//!
//! ## Features
//!
//! - Lowercasing and ordered character replacement
//! - Stop phrase removal with accounting of what was removed
//! - Street and housenumber replacer rules proposing fuzzy variants
//! - Multi-word rule matches kept together as single tokens
//! - Cycle-safe synonym chains
//! - Optional-term classification
//! - Immutable, thread-shareable rule sets
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use geoquery::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .token_separators(" ,")
//!     .optional_literal("the")
//!     .build()
//!     .unwrap();
//! let analyzer = AddressQueryAnalyzer::new(Arc::new(rules));
//!
//! let query = analyzer.analyze("The Mall, London");
//! assert_eq!(query.print(), "opt(the) mall london");
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::{AddressQueryAnalyzer, QueryAnalyzer};
    pub use crate::analysis::query::Query;
    pub use crate::analysis::replacer::{
        PatternReplacer, Replacer, ReplacerCategory, ReplacerRule,
    };
    pub use crate::analysis::rules::{RuleSet, RuleSetBuilder};
    pub use crate::analysis::synonym::SynonymTable;
    pub use crate::analysis::token::QToken;
    pub use crate::config::RuleSetConfig;
    pub use crate::error::{GeoQueryError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
