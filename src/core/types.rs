use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Mapping of TLD strings to a presence flag.
///
/// Only keys mapped to `true` count as listed.
pub type Wordlist = HashMap<String, bool>;

/// Classification of one candidate URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlClass {
    /// The candidate exactly as supplied
    pub url: String,
    /// Splits into host and optional path/query/fragment without a scheme
    pub parseable: bool,
    /// Parseable, optionally behind a recognised transfer scheme
    pub reachable: bool,
}

impl UrlClass {
    pub fn new(url: impl Into<String>, parseable: bool, reachable: bool) -> Self {
        Self {
            url: url.into(),
            parseable,
            reachable,
        }
    }
}

impl fmt::Display for UrlClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |b: bool| if b { "yes" } else { "no" };
        write!(
            f,
            "{} parseable={} reachable={}",
            self.url,
            flag(self.parseable),
            flag(self.reachable)
        )
    }
}
