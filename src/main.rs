// Record Pipeline - Main executable
// Author: Gabriel Demetrios Lafis

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::{debug, warn};

use record_pipeline::{
    data::{sample_users, source_for_path, UserRecord},
    runner::{resolve_styles, run_examples},
    utils::{init_logging, Config},
};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("Record Pipeline")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Filter and transform user records, written in five call styles")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Reads records from a JSON or CSV file instead of the sample")
                .takes_value(true),
        )
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .value_name("N")
                .help("Runs only the given example style (1 to 5); may be repeated")
                .takes_value(true)
                .multiple_occurrences(true)
                .possible_values(["1", "2", "3", "4", "5"]),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Overrides the configured log level")
                .takes_value(true),
        )
        .get_matches();

    // Load configuration
    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => Config::default(),
    };

    // Command line arguments override the config file
    if let Some(level) = matches.value_of("log-level") {
        config.logging.level = level.to_string();
    }
    if let Some(path) = matches.value_of("input") {
        config.source.path = Some(path.to_string());
    }
    if let Some(values) = matches.values_of("style") {
        config.run.styles = values
            .map(|value| value.parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .context("Invalid style number")?;
    }

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    let records: Vec<UserRecord> = match &config.source.path {
        Some(path) => {
            let source = source_for_path(path, config.source.format.as_deref())?;
            debug!("Reading records from {} source {}", source.source_type(), source.name());
            source
                .read()
                .with_context(|| format!("Failed to read records from {}", path))?
        }
        None => sample_users().to_vec(),
    };

    if records.is_empty() {
        warn!("No records to process");
    }

    let styles = resolve_styles(&config.run.styles)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_examples(&styles, &records, &mut out).context("Failed to write example output")?;
    out.flush()?;

    Ok(())
}
