//! Core types and foundational components
//!
//! This module contains the fundamental data types, error handling,
//! and constants used throughout the crate.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{DomainScanError, Result};
pub use types::{UrlClass, Wordlist};
