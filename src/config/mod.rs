//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{CONFIG_FILE_NAME, defaults, output_formats};
use crate::core::error::{DomainScanError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Two-label suffixes treated as a single TLD (replaces the built-in set)
    pub compound_tlds: Option<Vec<String>>,

    /// Additional two-label suffixes on top of `compound_tlds`
    pub extra_compound_tlds: Option<Vec<String>>,

    /// Transfer schemes recognised in front of `://`
    pub schemes: Option<Vec<String>>,

    /// Regex character class for one host label character
    pub label_class: Option<String>,

    /// Minimum length of a single-label TLD
    pub min_tld_len: Option<usize>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compound_tlds: None, // Built-in set
            extra_compound_tlds: None,
            schemes: None, // Built-in set
            label_class: Some(defaults::LABEL_CLASS.to_string()),
            min_tld_len: Some(defaults::MIN_TLD_LEN),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DomainScanError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            DomainScanError::TomlParsing(err) => DomainScanError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                err
            )),
            other => other,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(CONFIG_FILE_NAME) {
            return config;
        }

        // Parent directories, up to 3 levels
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref extra) = cli_config.extra_compound_tlds {
            let merged = self.extra_compound_tlds.get_or_insert_with(Vec::new);
            merged.extend(extra.iter().cloned());
        }
        if let Some(ref schemes) = cli_config.schemes {
            self.schemes = Some(schemes.clone());
        }
        if let Some(min_tld_len) = cli_config.min_tld_len {
            self.min_tld_len = Some(min_tld_len);
        }

        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// All compound TLDs in effect, lowercased
    pub fn compound_tld_set(&self) -> FxHashSet<String> {
        let base: Vec<String> = match self.compound_tlds {
            Some(ref tlds) => tlds.clone(),
            None => defaults::COMPOUND_TLDS
                .iter()
                .map(|tld| tld.to_string())
                .collect(),
        };

        base.iter()
            .chain(self.extra_compound_tlds.iter().flatten())
            .map(|tld| tld.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    /// Recognised transfer schemes, lowercased
    pub fn scheme_set(&self) -> FxHashSet<String> {
        match self.schemes {
            Some(ref schemes) => schemes.iter().map(|s| s.to_ascii_lowercase()).collect(),
            None => defaults::SCHEMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn label_class(&self) -> &str {
        self.label_class.as_deref().unwrap_or(defaults::LABEL_CLASS)
    }

    pub fn min_tld_len(&self) -> usize {
        self.min_tld_len.unwrap_or(defaults::MIN_TLD_LEN)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.min_tld_len == Some(0) {
            return Err(DomainScanError::Config(
                "min_tld_len cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        for tld in self
            .compound_tlds
            .iter()
            .chain(self.extra_compound_tlds.iter())
            .flatten()
        {
            let labels: Vec<&str> = tld.trim_start_matches('.').split('.').collect();
            if labels.len() != 2 || labels.iter().any(|label| label.is_empty()) {
                return Err(DomainScanError::Config(format!(
                    "Compound TLD '{tld}' must consist of exactly two labels, e.g. 'co.uk'."
                )));
            }
        }

        if let Some(ref schemes) = self.schemes {
            for scheme in schemes {
                let well_formed = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
                if !well_formed {
                    return Err(DomainScanError::Config(format!(
                        "Scheme '{scheme}' is not a valid URI scheme name."
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(DomainScanError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        // The label class must compile on its own
        Regex::new(self.label_class())?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub extra_compound_tlds: Option<Vec<String>>, // --compound-tld
    pub schemes: Option<Vec<String>>,             // --scheme
    pub min_tld_len: Option<usize>,               // --min-tld-len

    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
