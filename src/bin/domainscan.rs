use clap::Parser;
use domainscan::config::{CliConfig, Config};
use domainscan::core::constants::output_formats;
use domainscan::logging;
use domainscan::ui::output;
use domainscan::ui::{Cli, Commands, cli_to_config};
use domainscan::validation::{ClassifyUrls, Validator};
use domainscan::{Detector, wordlist};

use std::fs;
use std::io::{self, Read};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Execute the selected subcommand and return the process exit code
pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();

    match &cli.command {
        Commands::Tlds { input } => {
            let text = read_input(input.as_deref())?;
            let tlds = Detector::from_config(&config)?.get_all_tld(&text)?;
            logging::log_results("tlds", tlds.len());
            print!("{}", output::render_list("tlds", None, &tlds, &format)?);
            Ok(0)
        }
        Commands::Domains { tld, input } => {
            let text = read_input(input.as_deref())?;
            let domains = Detector::from_config(&config)?.get_first_level_domain(&text, tld)?;
            logging::log_results("domains", domains.len());
            print!(
                "{}",
                output::render_list("domains", Some(tld), &domains, &format)?
            );
            Ok(0)
        }
        Commands::Subdomains { domain, input } => {
            let text = read_input(input.as_deref())?;
            let subdomains = Detector::from_config(&config)?.get_subdomain(&text, domain)?;
            logging::log_results("subdomains", subdomains.len());
            print!(
                "{}",
                output::render_list("subdomains", Some(domain), &subdomains, &format)?
            );
            Ok(0)
        }
        Commands::CheckTld {
            tld,
            wordlist: path,
        } => {
            let wordlist = wordlist::load_from_file(path).inspect_err(|e| {
                logging::log_error("Could not load wordlist", Some(e));
            })?;
            let listed = Detector::from_config(&config)?
                .wordlist_contains_tld(&tld.to_lowercase(), Some(&wordlist))?;
            print!("{}", output::render_lookup(tld, listed, &format)?);
            Ok(if listed { 0 } else { 1 })
        }
        Commands::Validate { urls, file } => {
            let mut candidates = urls.clone();
            if let Some(path) = file {
                let content = fs::read_to_string(path)?;
                logging::log_input_info(path, content.len());
                candidates.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string),
                );
            }
            if candidates.is_empty() {
                eprintln!("Error: No URLs provided");
                eprintln!("\nFor more information, try '--help'.");
                return Ok(1);
            }

            let classes = Validator::from_config(&config)?.classify_all(&candidates)?;
            logging::log_results("validate", classes.len());
            print!("{}", output::render_classes(&classes, &format)?);
            Ok(0)
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence; re-check the merged values
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Read the whole input text from a file, or stdin when no file is given
fn read_input(path: Option<&str>) -> io::Result<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    logging::log_input_info(path.unwrap_or("stdin"), text.len());
    Ok(text)
}
