mod airports;
mod ask;
mod config;
mod error;
mod fetch;
mod report;
mod shell;
mod util;

use airports::Airports;
use config::{read_config, write_config, ConfigData, CONFIG_FILENAME};
use error::Error;
use fetch::Fetcher;
use log::{error, info, warn};
use shell::{query_from_args, Shell};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fmt::Display;
use std::io;
use std::path::Path;

const USAGE: &str = "Usage: askcalc [ROUTE [SEATS] [FREQUENCY]]
  ROUTE is ICN-LAX, ICN>LAX, ICN/LAX or ICN LAX
  e.g. askcalc ICN LAX 300 7";

fn display_msg_and_exit(msg: impl Display) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

// Returns whether every requested route could be calculated
fn run(airports: &Airports, config: &ConfigData, args: &[String]) -> Result<bool, Error> {
    let stdout = io::stdout();

    if args.is_empty() {
        let stdin = io::stdin();
        Shell::new(airports, config, stdin.lock(), stdout.lock()).run()?;
        return Ok(true);
    }

    let query = query_from_args(args, config)?;
    let calculated = Shell::new(airports, config, io::empty(), stdout.lock()).calculate(&query)?;
    Ok(calculated)
}

fn main() {
    // Read from config
    let config_exists = Path::new(CONFIG_FILENAME).exists();
    let config = if config_exists {
        match read_config(CONFIG_FILENAME) {
            Ok(config) => config,
            Err(e) => display_msg_and_exit(format!(
                "Could not read {}! Reason: {}",
                CONFIG_FILENAME, e
            )),
        }
    } else {
        ConfigData::default()
    };

    // Setup logging
    TermLogger::init(
        config.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    if !config_exists {
        match write_config(CONFIG_FILENAME, &config) {
            Ok(_) => info!("Created {} with default settings", CONFIG_FILENAME),
            Err(e) => warn!("Could not create {}! Reason: {}", CONFIG_FILENAME, e),
        }
    }

    // Load airports
    let fetcher = Fetcher::new(config.request_timeout(), config.download_attempts);
    let airports = match Airports::load(
        &config.airport_data_path,
        &config.airport_data_url,
        &fetcher,
    ) {
        Ok(a) => a,
        Err(e) => display_msg_and_exit(format!("Could not load airport data! Reason: {}", e)),
    };

    if airports.is_empty() {
        display_msg_and_exit(format!(
            "No airports found in {}!",
            config.airport_data_path
        ));
    }

    info!("Loaded {} airports", airports.len());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&airports, &config, &args) {
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(e @ Error::InvalidInput(_)) => display_msg_and_exit(format!("{}\n{}", e, USAGE)),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
