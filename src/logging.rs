use crate::config::Config;
use log::{debug, error, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let result = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    match result {
        Ok(()) => debug!("Logger initialized with level: {level:?}"),
        Err(e) => debug!("Logger already initialized, keeping it: {e}"),
    }
}

/// Log the pattern-table settings in effect
pub fn log_config_info(config: &Config) {
    let compound_tlds = config.compound_tld_set().len();
    let schemes = config.scheme_set();
    let mut schemes: Vec<&str> = schemes.iter().map(String::as_str).collect();
    schemes.sort_unstable();

    info!(
        "Configuration: label_class={}, min_tld_len={}, compound_tlds={compound_tlds}",
        config.label_class(),
        config.min_tld_len()
    );
    info!("Schemes: {}", schemes.join(", "));
}

/// Log how much input is about to be scanned
pub fn log_input_info(source: &str, bytes: usize) {
    info!("Scanning {bytes} byte(s) from {source}");
}

/// Log the number of results an operation produced
pub fn log_results(operation: &str, count: usize) {
    info!("{operation}: {count} result(s)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
