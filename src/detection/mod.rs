//! Domain detection in free-form text
//!
//! This module finds TLDs, first-level domains, subdomains and paths
//! in unstructured text using a precompiled pattern table.

pub mod detector;
pub mod patterns;

// Re-export commonly used items
pub use detector::Detector;
pub use patterns::{HostMatch, PatternTable};
