use std::fmt;

/// Error types for domainscan operations
///
/// A missing match is never an error. These variants cover the few
/// conditions where no meaningful answer can be produced.
#[derive(Debug)]
pub enum DomainScanError {
    /// IO error (wordlist, config or input files)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A pattern table failed to compile
    Pattern(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON output error
    Serialization(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for DomainScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainScanError::Io(err) => write!(f, "IO error: {err}"),
            DomainScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DomainScanError::Pattern(err) => write!(f, "Pattern error: {err}"),
            DomainScanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            DomainScanError::Serialization(err) => write!(f, "Serialization error: {err}"),
            DomainScanError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for DomainScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainScanError::Io(err) => Some(err),
            DomainScanError::Pattern(err) => Some(err),
            DomainScanError::TomlParsing(err) => Some(err),
            DomainScanError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DomainScanError {
    fn from(err: std::io::Error) -> Self {
        DomainScanError::Io(err)
    }
}

impl From<regex::Error> for DomainScanError {
    fn from(err: regex::Error) -> Self {
        DomainScanError::Pattern(err)
    }
}

impl From<toml::de::Error> for DomainScanError {
    fn from(err: toml::de::Error) -> Self {
        DomainScanError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for DomainScanError {
    fn from(err: serde_json::Error) -> Self {
        DomainScanError::Serialization(err)
    }
}

/// Type alias for Results using DomainScanError
pub type Result<T> = std::result::Result<T, DomainScanError>;
