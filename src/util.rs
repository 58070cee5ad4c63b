//! Shared utility modules used across geoquery components.

pub mod pattern;
pub mod text;
