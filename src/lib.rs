//! Find top-level domains, first-level domains and subdomains in
//! unstructured text, and classify URL strings as parseable or reachable.
//!
//! ```
//! use domainscan::Detector;
//!
//! let detector = Detector::new();
//! let domains = detector
//!     .get_first_level_domain("mail me at info@example.de or visit shop.example.de", "de")
//!     .unwrap();
//! assert_eq!(domains, vec!["example.de"]);
//! ```

pub mod config;
pub mod core;
pub mod detection;
pub mod logging;
pub mod ui;
pub mod validation;
pub mod wordlist;

// Re-export commonly used items
pub use config::Config;
pub use crate::core::{DomainScanError, Result, UrlClass, Wordlist};
pub use detection::Detector;
pub use validation::{ClassifyUrls, Validator};
