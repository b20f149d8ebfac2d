//! Ala Router - Main entrypoint.
//!
//! Loads a route table from configuration and matches paths against it.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use ala_router_lib::config::{self, AlaConfig, ConfigLoader, ConfigResult, LogConfig};
use ala_router_lib::error::{
    report_error, set_error_reporter, AlaError, AlaResult, ErrorContext, TracingErrorReporter,
};
use ala_router_lib::router::build_trie;
use clap::{Parser, Subcommand};
use hashbrown::HashMap;
use serde::Serialize;
use tracing::info;

/// Command line arguments for the Ala router.
#[derive(Parser, Debug)]
#[clap(name = "Ala Router", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Match a path against the route table
    Match {
        /// Path to match
        path: String,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the route trie
    Print,

    /// List the registered route patterns
    Routes,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Outcome of the `match` subcommand.
#[derive(Debug, Serialize)]
struct MatchReport {
    path: String,
    matched: bool,
    target: Option<String>,
    parameters: HashMap<String, String>,
    asterisk: Option<String>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> AlaResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| AlaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Log settings of the loaded configuration, or defaults if it failed to load.
fn log_settings(loaded: &ConfigResult<AlaConfig>) -> LogConfig {
    loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default()
}

/// Returns the loaded configuration, or reports the load error and exits.
fn loaded_or_exit(loaded: ConfigResult<AlaConfig>) -> AlaConfig {
    match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    }
}

fn run_match(config: &AlaConfig, path: &str, json: bool) -> AlaResult<bool> {
    let mut trie = build_trie(config)?;
    let matched = trie.matches(path);
    let report = MatchReport {
        path: path.to_string(),
        matched,
        target: trie.hit_data().cloned(),
        parameters: trie.hit_parameters(),
        asterisk: trie.hit_asterisk_match().map(str::to_string),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(target) = &report.target {
        println!("{} -> {}", report.path, target);
        let mut parameters: Vec<_> = report.parameters.iter().collect();
        parameters.sort();
        for (name, value) in parameters {
            println!("  {name} = {value}");
        }
        if let Some(rest) = &report.asterisk {
            println!("  * = {rest}");
        }
    } else {
        println!("{}: no match", report.path);
    }
    Ok(matched)
}

/// Main entry point for the application.
fn main() -> AlaResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    // Loaded once; commands that need it exit on a load error.
    let loaded = loader.load();
    init_logging(&log_settings(&loaded))?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Match { path, json } => {
            let config = loaded_or_exit(loaded);
            match run_match(&config, &path, json) {
                Ok(true) => Ok(()),
                Ok(false) => process::exit(1),
                Err(e) => {
                    report_error(ErrorContext::new(e, "match").with_details(path));
                    process::exit(1);
                }
            }
        }
        Command::Print => {
            let config = loaded_or_exit(loaded);
            build_trie(&config)?.print();
            Ok(())
        }
        Command::Routes => {
            let config = loaded_or_exit(loaded);
            for route in build_trie(&config)?.routes() {
                println!("{route}");
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            let config = loaded_or_exit(loaded);
            let trie = build_trie(&config)?;
            info!(routes = trie.len(), "Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = AlaConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| AlaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
