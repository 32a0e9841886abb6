//! URL classification
//!
//! This module decides whether candidate URL strings are parseable
//! and reachable. The checks are purely syntactic.

pub mod validator;

// Re-export commonly used items
pub use validator::{ClassifyUrls, Validator, ValidatorPatterns};
