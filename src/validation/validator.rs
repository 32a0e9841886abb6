use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

use crate::config::Config;
use crate::core::constants::host_limits;
use crate::core::error::{DomainScanError, Result};
use crate::core::types::UrlClass;

static DEFAULT_PATTERNS: Lazy<std::result::Result<ValidatorPatterns, regex::Error>> =
    Lazy::new(|| ValidatorPatterns::compile(&Config::default()));

/// Classifies many candidate URLs at once.
pub trait ClassifyUrls {
    fn classify_all<S: AsRef<str> + Sync>(&self, urls: &[S]) -> Result<Vec<UrlClass>>;
}

/// Precompiled patterns and the recognised scheme set.
#[derive(Debug, Clone)]
pub struct ValidatorPatterns {
    scheme: Regex,
    label: Regex,
    tld: Regex,
    port: Regex,
    schemes: FxHashSet<String>,
}

impl ValidatorPatterns {
    pub fn new(config: &Config) -> Result<Self> {
        Self::compile(config).map_err(Into::into)
    }

    fn compile(config: &Config) -> std::result::Result<Self, regex::Error> {
        let min_tld_len = config.min_tld_len();
        Ok(Self {
            scheme: Regex::new(r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.-]*)://")?,
            label: Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$")?,
            tld: Regex::new(&format!(r"^[A-Za-z]{{{min_tld_len},}}$"))?,
            port: Regex::new(r"^[0-9]{1,5}$")?,
            schemes: config.scheme_set(),
        })
    }

    /// Remainder after a recognised `scheme://` prefix.
    fn strip_scheme<'u>(&self, url: &'u str) -> Option<&'u str> {
        let caps = self.scheme.captures(url)?;
        let scheme = caps.name("scheme")?.as_str().to_ascii_lowercase();
        if !self.schemes.contains(&scheme) {
            log::debug!("Scheme '{scheme}' is not a recognised transfer scheme");
            return None;
        }
        let prefix = caps.get(0)?;
        Some(&url[prefix.end()..])
    }

    /// `host[:port][/path][?query][#fragment]` with no scheme in front.
    fn is_reference(&self, url: &str) -> bool {
        if url.is_empty() || url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }

        let authority_end = url.find(['/', '?', '#']).unwrap_or(url.len());
        let (authority, rest) = url.split_at(authority_end);
        if !self.is_authority(authority) {
            log::trace!("'{url}' has no usable host in '{authority}'");
            return false;
        }

        let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
        if rest[..path_end].contains("//") {
            log::trace!("'{url}' has an empty path segment");
            return false;
        }

        true
    }

    fn is_authority(&self, authority: &str) -> bool {
        let host = match authority.rsplit_once(':') {
            Some((host, port)) => {
                if !self.port.is_match(port) || port.parse::<u16>().is_err() {
                    return false;
                }
                host
            }
            None => authority,
        };

        host.parse::<Ipv4Addr>().is_ok() || self.is_domain(host)
    }

    fn is_domain(&self, host: &str) -> bool {
        if host.len() > host_limits::MAX_HOST_LEN {
            return false;
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < host_limits::MIN_HOST_LABELS {
            return false;
        }

        let labels_ok = labels
            .iter()
            .all(|label| label.len() <= host_limits::MAX_LABEL_LEN && self.label.is_match(label));

        labels_ok && labels.last().is_some_and(|tld| self.tld.is_match(tld))
    }
}

/// Classifies candidate URL strings as parseable and reachable.
///
/// Both checks are syntactic; nothing is resolved or fetched.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    patterns: Option<Arc<ValidatorPatterns>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validator with its own scheme set and TLD length.
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = ValidatorPatterns::new(config)?;
        Ok(Self {
            patterns: Some(Arc::new(patterns)),
        })
    }

    fn patterns(&self) -> Result<&ValidatorPatterns> {
        match self.patterns {
            Some(ref patterns) => Ok(patterns.as_ref()),
            None => DEFAULT_PATTERNS
                .as_ref()
                .map_err(|e| DomainScanError::Pattern(e.clone())),
        }
    }

    /// Whether `url` splits into a host and an optional path, query and
    /// fragment, read without any scheme prefix.
    ///
    /// # Examples
    /// ```
    /// use domainscan::validation::Validator;
    ///
    /// let validator = Validator::new();
    /// assert!(validator.is_parseable("duckduckgo.com/?q=github").unwrap());
    /// assert!(!validator.is_parseable("https://duckduckgo.com/q=github").unwrap());
    /// assert!(!validator.is_parseable("").unwrap());
    /// ```
    pub fn is_parseable(&self, url: &str) -> Result<bool> {
        Ok(self.patterns()?.is_reference(url))
    }

    /// Whether `url` is parseable once a recognised transfer scheme is
    /// stripped. Strings without a recognised scheme are checked as they are.
    pub fn is_reachable(&self, url: &str) -> Result<bool> {
        let patterns = self.patterns()?;
        let reference = patterns.strip_scheme(url).unwrap_or(url);
        Ok(patterns.is_reference(reference))
    }

    pub fn classify(&self, url: &str) -> Result<UrlClass> {
        Ok(UrlClass::new(
            url,
            self.is_parseable(url)?,
            self.is_reachable(url)?,
        ))
    }
}

impl ClassifyUrls for Validator {
    fn classify_all<S: AsRef<str> + Sync>(&self, urls: &[S]) -> Result<Vec<UrlClass>> {
        let classes: Result<Vec<UrlClass>> = urls
            .par_iter()
            .map(|url| self.classify(url.as_ref()))
            .collect();

        if let Ok(ref classes) = classes {
            let reachable = classes.iter().filter(|c| c.reachable).count();
            log::info!("Classified {} URL(s), {reachable} reachable", classes.len());
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_is_parseable() {
        let validator = Validator::new();
        let cases = vec![
            ("duckduckgo.com/?q=github&t=h_&ia=web", true),
            ("duckduckgo.com/?q=github&t=h_&ia=web#element", true),
            ("https://duckduckgo.com/q=github&t=h_&ia=web", false),
            ("htps://duckduckgo.com//q=github&t=h_&ia=web", false),
            ("https://com//q=github&t=h_&ia=web", false),
            ("", false),
        ];

        for (url, expected) in cases {
            let actual = validator.is_parseable(url).unwrap();
            assert_eq!(actual, expected, "url: {url}");
        }
    }

    #[test]
    fn test_is_reachable() {
        let validator = Validator::new();
        let cases = vec![
            ("duckduckgo.com/?q=github&t=h_&ia=web", true),
            ("duckduckgo.com/?q=github&t=h_&ia=web#element", true),
            ("https://duckduckgo.com/q=github&t=h_&ia=web", true),
            ("htps://duckduckgo.com//q=github&t=h_&ia=web", false),
            ("https://com//q=github&t=h_&ia=web", false),
            ("", false),
        ];

        for (url, expected) in cases {
            let actual = validator.is_reachable(url).unwrap();
            assert_eq!(actual, expected, "url: {url}");
        }
    }

    #[test]
    fn test_is_parseable__host_grammar() {
        let validator = Validator::new();
        let cases = vec![
            ("example.com", true),
            ("sub.example.co.uk/path", true),
            ("example.com:8080/api", true),
            ("192.168.1.1/status", true),
            ("localhost", false),
            ("com", false),
            ("-example.com", false),
            ("example-.com", false),
            ("exa_mple.com", false),
            ("example.c0m", false),
            ("example.c", false),
            ("example..com", false),
            ("example.com.", false),
            ("example.com:99999", false),
            ("example.com:", false),
            ("example .com", false),
            ("/just/a/path", false),
            ("?q=1", false),
        ];

        for (url, expected) in cases {
            let actual = validator.is_parseable(url).unwrap();
            assert_eq!(actual, expected, "url: {url}");
        }
    }

    #[test]
    fn test_is_parseable__label_length() {
        let validator = Validator::new();
        let long_label = "a".repeat(64);
        assert!(!validator.is_parseable(&format!("{long_label}.com")).unwrap());
        assert!(validator.is_parseable(&format!("{}.com", &long_label[..63])).unwrap());
    }

    #[test]
    fn test_is_parseable__double_slash_only_in_path() {
        let validator = Validator::new();
        assert!(!validator.is_parseable("example.com/a//b").unwrap());
        assert!(validator.is_parseable("example.com/a?next=//b").unwrap());
        assert!(validator.is_parseable("example.com/a#//b").unwrap());
    }

    #[test]
    fn test_is_reachable__schemes() {
        let validator = Validator::new();
        let cases = vec![
            ("http://example.com", true),
            ("HTTPS://example.com/path", true),
            ("ftp://files.example.org/pub", true),
            ("gopher://example.com", false),
            ("https://", false),
            ("https:///path", false),
            ("https://example.com:443/?q=1", true),
        ];

        for (url, expected) in cases {
            let actual = validator.is_reachable(url).unwrap();
            assert_eq!(actual, expected, "url: {url}");
        }
    }

    #[test]
    fn test_from_config__custom_schemes() -> Result<()> {
        let config = Config {
            schemes: Some(vec!["gopher".to_string()]),
            ..Default::default()
        };
        let validator = Validator::from_config(&config)?;

        assert!(validator.is_reachable("gopher://example.com")?);
        assert!(!validator.is_reachable("https://example.com")?);
        Ok(())
    }

    #[test]
    fn test_classify() {
        let validator = Validator::new();
        let class = validator
            .classify("https://duckduckgo.com/q=github&t=h_&ia=web")
            .unwrap();
        assert!(!class.parseable);
        assert!(class.reachable);
    }

    #[test]
    fn test_classify_all__keeps_order() {
        let validator = Validator::new();
        let urls = vec![
            "duckduckgo.com/?q=1",
            "htps://duckduckgo.com//q=1",
            "https://duckduckgo.com/q=1",
            "",
        ];

        let classes = validator.classify_all(&urls).unwrap();
        let actual: Vec<(&str, bool, bool)> = classes
            .iter()
            .map(|c| (c.url.as_str(), c.parseable, c.reachable))
            .collect();

        assert_eq!(
            actual,
            vec![
                ("duckduckgo.com/?q=1", true, true),
                ("htps://duckduckgo.com//q=1", false, false),
                ("https://duckduckgo.com/q=1", false, true),
                ("", false, false),
            ]
        );
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
