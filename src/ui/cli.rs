// Command-line interface definitions and parsing for domainscan

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // Detection
    /// Extra two-label TLD treated as one unit (repeatable, e.g. co.ch)
    #[arg(long = "compound-tld", value_name = "TLD", global = true, help_heading = "Detection")]
    pub compound_tld: Vec<String>,

    /// Minimum length of a single-label TLD (default: 2)
    #[arg(long, value_name = "LEN", global = true, help_heading = "Detection")]
    pub min_tld_len: Option<usize>,

    // Validation
    /// Transfer scheme recognised by `validate` (repeatable, replaces the defaults)
    #[arg(long = "scheme", value_name = "SCHEME", global = true, help_heading = "Validation")]
    pub scheme: Vec<String>,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, global = true, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every TLD found in the text
    Tlds {
        /// Text file to scan (default: stdin)
        input: Option<String>,
    },
    /// List first-level domains using a TLD
    Domains {
        /// TLD to look for, e.g. de or co.uk
        #[arg(long)]
        tld: String,
        /// Text file to scan (default: stdin)
        input: Option<String>,
    },
    /// List subdomains and paths of a domain
    Subdomains {
        /// Domain to look for, e.g. example.com
        #[arg(long)]
        domain: String,
        /// Text file to scan (default: stdin)
        input: Option<String>,
    },
    /// Check whether a TLD is listed in a wordlist file
    #[command(name = "check-tld")]
    CheckTld {
        /// TLD to look up
        tld: String,
        /// Wordlist file, one TLD per line
        #[arg(long, value_name = "FILE")]
        wordlist: String,
    },
    /// Classify URLs as parseable and reachable
    Validate {
        /// URLs to classify
        urls: Vec<String>,
        /// Read additional URLs from a file, one per line
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    if !cli.compound_tld.is_empty() {
        cli_config.extra_compound_tlds = Some(
            cli.compound_tld
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        );
    }
    if !cli.scheme.is_empty() {
        cli_config.schemes = Some(cli.scheme.iter().map(|s| s.trim().to_string()).collect());
    }
    cli_config.min_tld_len = cli.min_tld_len;

    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.output_format = cli.format.clone();

    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}
