use memchr::memchr;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::config::Config;
use crate::core::error::{DomainScanError, Result};
use crate::core::types::Wordlist;

use super::patterns::{DEFAULT_TABLE, HostMatch, PatternTable};

/// Extracts TLDs, first-level domains, subdomains and paths from text.
///
/// A `Detector` holds no per-call state. The default one shares a lazily
/// compiled pattern table; `from_config` compiles a private table.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    table: Option<Arc<PatternTable>>,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a detector with its own pattern table.
    pub fn from_config(config: &Config) -> Result<Self> {
        let table = PatternTable::new(config)?;
        Ok(Self {
            table: Some(Arc::new(table)),
        })
    }

    fn table(&self) -> Result<&PatternTable> {
        match self.table {
            Some(ref table) => Ok(table.as_ref()),
            None => DEFAULT_TABLE
                .as_ref()
                .map_err(|e| DomainScanError::Pattern(e.clone())),
        }
    }

    /// Host tokens in `text`; skips the regex entirely when there is no `.`.
    fn hosts<'t>(&self, text: &'t str) -> Result<Vec<HostMatch<'t>>> {
        let table = self.table()?;
        if memchr(b'.', text.as_bytes()).is_none() {
            return Ok(Vec::new());
        }
        Ok(table.hosts(text))
    }

    /// Every distinct TLD in `text`, lowercased, in order of first appearance.
    ///
    /// Known two-label suffixes such as `co.uk` win over their last label.
    ///
    /// # Examples
    /// ```
    /// use domainscan::detection::Detector;
    ///
    /// let detector = Detector::new();
    /// let tlds = detector
    ///     .get_all_tld("Wie .co.uk oder auch .co.at und example.com")
    ///     .unwrap();
    /// assert_eq!(tlds, vec!["co.uk", "co.at", "com"]);
    /// ```
    pub fn get_all_tld(&self, text: &str) -> Result<Vec<String>> {
        let table = self.table()?;
        let mut seen = FxHashSet::default();
        let mut tlds = Vec::new();

        for host in self.hosts(text)? {
            let Some(tld) = table.tld_of(host.host) else {
                log::trace!("No TLD in '{}'", host.host);
                continue;
            };
            push_unique(&mut seen, &mut tlds, tld.to_ascii_lowercase());
        }

        log::debug!("Found {} distinct TLD(s)", tlds.len());
        Ok(tlds)
    }

    /// Whether `wordlist` lists `tld` with a `true` flag.
    ///
    /// Lookup is by exact key. A missing wordlist is an invalid argument.
    pub fn wordlist_contains_tld(&self, tld: &str, wordlist: Option<&Wordlist>) -> Result<bool> {
        let wordlist = wordlist.ok_or_else(|| {
            DomainScanError::InvalidArgument("a wordlist is required to look up TLDs".to_string())
        })?;

        Ok(wordlist.get(tld).copied().unwrap_or(false))
    }

    /// Domains of the form `label.tld` in `text`.
    ///
    /// A host with more labels in front, like `sub.domain.de`, does not
    /// produce `domain.de`. An empty `tld` yields no domains.
    pub fn get_first_level_domain(&self, text: &str, tld: &str) -> Result<Vec<String>> {
        let tld = tld.trim_start_matches('.');
        if tld.is_empty() {
            return Ok(Vec::new());
        }

        let table = self.table()?;
        let mut seen = FxHashSet::default();
        let mut domains = Vec::new();
        for host in self.hosts(text)? {
            let Some(label) = strip_domain_suffix(host.host, tld) else {
                continue;
            };
            if label.is_empty() || label.contains('.') {
                continue;
            }
            // `co.uk` ends with `.uk` but its TLD is `co.uk`
            if !table
                .tld_of(host.host)
                .is_some_and(|found| found.eq_ignore_ascii_case(tld))
            {
                log::trace!("'{}' does not use the TLD '{tld}'", host.host);
                continue;
            }
            push_unique(&mut seen, &mut domains, host.host.to_string());
        }

        log::debug!("Found {} first-level domain(s) for '{tld}'", domains.len());
        Ok(domains)
    }

    /// Subdomains of `domain` in `text`, each with its path or query, if any.
    ///
    /// A bare `domain` is never returned. When `domain` already has a
    /// sub-label (`sub.website.co.uk`), an exact occurrence followed by a
    /// path or query is returned too. A chain written both with and without
    /// a path is only reported with the path.
    pub fn get_subdomain(&self, text: &str, domain: &str) -> Result<Vec<String>> {
        let domain = domain.trim_start_matches('.');
        if domain.is_empty() {
            return Ok(Vec::new());
        }

        let table = self.table()?;
        let domain_has_sub_label = table.labels_before_tld(domain) > 1;

        let mut candidates: Vec<HostMatch<'_>> = Vec::new();
        for host in self.hosts(text)? {
            let is_subdomain = strip_domain_suffix(host.host, domain)
                .is_some_and(|prefix| !prefix.is_empty());
            let is_path_of_domain = domain_has_sub_label
                && !host.path.is_empty()
                && host.host.eq_ignore_ascii_case(domain);

            if is_subdomain || is_path_of_domain {
                candidates.push(host);
            }
        }

        let with_path: FxHashSet<&str> = candidates
            .iter()
            .filter(|m| !m.path.is_empty())
            .map(|m| m.host)
            .collect();

        let mut seen = FxHashSet::default();
        let mut subdomains = Vec::new();
        for m in &candidates {
            if m.path.is_empty() && with_path.contains(m.host) {
                log::trace!("'{}' is reported with its path", m.host);
                continue;
            }
            push_unique(&mut seen, &mut subdomains, format!("{}{}", m.host, m.path));
        }

        log::debug!("Found {} subdomain(s) of '{domain}'", subdomains.len());
        Ok(subdomains)
    }
}

/// The part of `host` in front of `.suffix`, compared case-insensitively.
///
/// Returns `Some("")` when `host` equals `suffix`.
fn strip_domain_suffix<'h>(host: &'h str, suffix: &str) -> Option<&'h str> {
    if host.len() < suffix.len() {
        return None;
    }
    let split = host.len() - suffix.len();
    if !host.is_char_boundary(split) || !host[split..].eq_ignore_ascii_case(suffix) {
        return None;
    }
    if split == 0 {
        return Some("");
    }
    host[..split].strip_suffix('.')
}

fn push_unique(seen: &mut FxHashSet<String>, list: &mut Vec<String>, item: String) {
    if seen.insert(item.clone()) {
        list.push(item);
    }
}
