/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Default pattern-table contents, output formats and file names live here so
/// the detector, validator and CLI agree on them.
/// Output format constants
pub mod output_formats {
    /// Text output format - one item per line
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Default pattern-table contents
pub mod defaults {
    /// Regex character class matching one host label character
    pub const LABEL_CLASS: &str = "[A-Za-z0-9-]";

    /// Minimum length of a single-label TLD
    pub const MIN_TLD_LEN: usize = 2;

    /// Two-label suffixes treated as one TLD
    pub const COMPOUND_TLDS: &[&str] = &[
        "ac.at", "co.at", "gv.at", "or.at", //
        "ac.uk", "co.uk", "gov.uk", "ltd.uk", "me.uk", "net.uk", "org.uk", "plc.uk", //
        "com.au", "net.au", "org.au", "edu.au", "gov.au", //
        "co.nz", "org.nz", "net.nz", //
        "co.jp", "ne.jp", "or.jp", "ac.jp", //
        "co.kr", "or.kr", //
        "com.br", "net.br", "org.br", //
        "com.mx", "com.cn", "com.tr", "com.ar", "com.sg", "com.hk", "com.tw", //
        "co.in", "co.id", "co.il", "co.za", "co.th",
    ];

    /// Transfer schemes recognised in front of `://`
    pub const SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];
}

/// Host grammar limits used by the validator
pub mod host_limits {
    /// Maximum length of a single DNS label
    pub const MAX_LABEL_LEN: usize = 63;
    /// Maximum length of a full host name
    pub const MAX_HOST_LEN: usize = 253;
    /// Minimum number of labels in a host name
    pub const MIN_HOST_LABELS: usize = 2;
}

/// ASCII characters stripped from the end of a path or query found in text.
/// Non-ASCII punctuation and quotes (`“`, `»`, `…`) are stripped as well.
pub const TRAILING_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\'', '*', '_',
];

/// Config file looked up by `Config::load_from_standard_locations`
pub const CONFIG_FILE_NAME: &str = ".domainscan.toml";
