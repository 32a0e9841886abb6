use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::config::Config;
use crate::core::constants::TRAILING_PUNCTUATION;
use crate::core::error::Result;

/// Default table, compiled on first use and shared by every default `Detector`.
pub(crate) static DEFAULT_TABLE: Lazy<std::result::Result<PatternTable, regex::Error>> =
    Lazy::new(|| PatternTable::compile(&Config::default()));

/// A host token found in text, with the path or query glued to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMatch<'t> {
    /// Host without a leading bare `.`
    pub host: &'t str,
    /// `/...` or `?...` suffix with trailing punctuation removed, may be empty
    pub path: &'t str,
    /// Whether the token was written with a leading `.` (e.g. `.de`)
    pub leading_dot: bool,
}

/// Precompiled patterns and lookup sets used by the detector.
#[derive(Debug, Clone)]
pub struct PatternTable {
    host: Regex,
    compound_tlds: FxHashSet<String>,
    min_tld_len: usize,
}

impl PatternTable {
    /// Compile the table for the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::compile(config).map_err(Into::into)
    }

    fn compile(config: &Config) -> std::result::Result<Self, regex::Error> {
        let class = config.label_class();
        // A label starts and ends on a non-hyphen character; the TLD holds no
        // hyphen at all, so `example.com-Link` stops after `com`.
        let edge = format!(r"[{class}--\-]");
        let label = format!(r"{edge}(?:{class}*{edge})?");
        let pattern = format!(
            r"(?P<host>(?:{label})?(?:\.{label})*\.{edge}+)(?P<path>[/?]\S*)?"
        );

        Ok(Self {
            host: Regex::new(&pattern)?,
            compound_tlds: config.compound_tld_set(),
            min_tld_len: config.min_tld_len(),
        })
    }

    /// All host tokens in `text` that stand on word boundaries.
    pub fn hosts<'t>(&self, text: &'t str) -> Vec<HostMatch<'t>> {
        let mut found = Vec::new();

        for caps in self.host.captures_iter(text) {
            let Some(host) = caps.name("host") else {
                continue;
            };

            let before = text[..host.start()].chars().next_back();
            if before.is_some_and(|c| is_word_char(c) || c == '.') {
                log::trace!("Skipping '{}': glued to preceding text", host.as_str());
                continue;
            }

            let path = caps
                .name("path")
                .map(|m| trim_path(m.as_str()))
                .unwrap_or_default();

            if path.is_empty() {
                let after = text[host.end()..].chars().next();
                if after.is_some_and(is_word_char) {
                    log::trace!("Skipping '{}': glued to following text", host.as_str());
                    continue;
                }
            }

            let raw = host.as_str();
            let (host, leading_dot) = match raw.strip_prefix('.') {
                Some(stripped) => (stripped, true),
                None => (raw, false),
            };

            found.push(HostMatch {
                host,
                path,
                leading_dot,
            });
        }

        found
    }

    /// The TLD a host ends with, preferring a known two-label suffix.
    pub fn tld_of<'h>(&self, host: &'h str) -> Option<&'h str> {
        let last_dot = host.rfind('.');
        let last = last_dot.map_or(host, |i| &host[i + 1..]);
        if !self.is_tld_label(last) {
            return None;
        }

        if let Some(i) = last_dot {
            let start = host[..i].rfind('.').map_or(0, |j| j + 1);
            let pair = &host[start..];
            if self.is_compound_tld(pair) {
                return Some(pair);
            }
        }

        Some(last)
    }

    /// Number of labels in front of the TLD.
    pub fn labels_before_tld(&self, host: &str) -> usize {
        let total = host.split('.').count();
        let tld_labels = self
            .tld_of(host)
            .map_or(1, |tld| tld.split('.').count());
        total.saturating_sub(tld_labels)
    }

    pub fn is_compound_tld(&self, candidate: &str) -> bool {
        self.compound_tlds
            .contains(candidate.to_ascii_lowercase().as_str())
    }

    fn is_tld_label(&self, label: &str) -> bool {
        label.chars().count() >= self.min_tld_len && label.chars().all(char::is_alphabetic)
    }
}

/// Characters that glue a token to its neighbour. A hyphen separates.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip sentence punctuation and closing quotes from the end of a path.
/// A bare `?` is dropped.
fn trim_path(path: &str) -> &str {
    path.trim_end_matches(|c: char| {
        TRAILING_PUNCTUATION.contains(&c) || (!c.is_ascii() && !c.is_alphanumeric())
    })
}
