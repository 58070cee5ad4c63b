//! Query analysis module for geoquery.
//!
//! This module provides the pieces of the query analysis pipeline: char
//! filters, replacer rules, synonym chains, the tokenizer, token annotation
//! and the analyzer tying them together.

pub mod analyzer;
pub mod char_filter;
pub mod query;
pub mod replacer;
pub mod rules;
pub mod synonym;
pub mod token;
pub mod tokenizer;
