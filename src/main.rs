//! Mauka Contacts - Main entrypoint.
//!
//! Loads configuration, initializes logging, optionally bulk-loads a names
//! file, then runs the requested command (the interactive session by default).

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mauka_contacts_lib::config::directory::DirectoryConfig;
use mauka_contacts_lib::config::{
    global_config, init_global_config, ConfigLoader, ContactsConfig, LogConfig, ENV_PREFIX,
};
use mauka_contacts_lib::directory::{Directory, SharedDirectory};
use mauka_contacts_lib::error::{
    set_error_reporter, ContactsError, ContactsResult, TracingErrorReporter,
};
use mauka_contacts_lib::session::Session;
use mauka_contacts_lib::VERSION;

/// Command line arguments for Mauka Contacts.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Contacts", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Newline-delimited names file to load before running the command
    #[clap(short, long, value_parser)]
    load: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive contact book
    Repl,

    /// Search the loaded names once and print the ranked results
    Search {
        /// Prefix to look up
        query: String,

        /// Print results with distances as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// the session transcript on stdout stays clean.
fn init_logging(log: &LogConfig) -> ContactsResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| {
        ContactsError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Builds a directory and fills it from `load`, if given.
fn build_directory(config: DirectoryConfig, load: Option<&Path>) -> anyhow::Result<Directory> {
    let mut directory = Directory::with_config(config);
    if let Some(path) = load {
        let report = directory
            .load_file(path)
            .with_context(|| format!("failed to load names from {}", path.display()))?;
        info!(
            added = report.added,
            rejected = report.rejected,
            "Names loaded from {:?}",
            path
        );
    }
    Ok(directory)
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    init_global_config(config);
    let settings = global_config()?;

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            info!(version = VERSION, "Starting Mauka Contacts");
            let directory =
                build_directory(settings.get().directory.clone(), args.load.as_deref())?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session =
                Session::new(stdin.lock(), stdout.lock(), SharedDirectory::new(directory));
            session.run()?;
            Ok(())
        }
        Command::Search { query, json } => {
            let directory =
                build_directory(settings.get().directory.clone(), args.load.as_deref())?;
            let ranked = directory.search_ranked(query.trim());

            let mut stdout = io::stdout().lock();
            if json {
                let rendered = serde_json::to_string_pretty(&ranked).map_err(ContactsError::from)?;
                writeln!(stdout, "{rendered}")?;
            } else if ranked.is_empty() {
                writeln!(stdout, "Not Found!")?;
            } else {
                for hit in ranked {
                    writeln!(stdout, "{}", hit.record)?;
                }
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = ContactsConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(ContactsError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| ContactsError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml).map_err(ContactsError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
