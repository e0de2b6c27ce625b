mod config;
mod error;

use std::sync::Arc;

use backend::{Backend, LocalDisk, StorageError};
use clap::{Parser, Subcommand};
use logger::{EventLogger, FileMeta, LogDocument};

use config::Config;
use error::{Error, Result};

const CONFIG_FILE: &str = "eventlog.toml";

#[derive(Parser)]
#[command(name = "eventlog")]
#[command(about = "Append structured events to per-identifier JSON logs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an event into an identifier's log
    Add {
        /// Identifier naming the log stream
        #[arg(short, long)]
        identifier: String,
        /// Qualified class name of the caller
        #[arg(short, long)]
        class: String,
        /// Function name of the caller
        #[arg(short, long)]
        function: String,
        /// Message text
        #[arg(short, long)]
        message: String,
        /// Severity level
        #[arg(short, long, default_value = "0")]
        level: i64,
        /// Optional exception message to attach
        #[arg(short, long)]
        exception: Option<String>,
    },
    /// Pretty-print an identifier's log document
    Show {
        /// Identifier naming the log stream
        #[arg(short, long)]
        identifier: String,
    },
    /// Print the path an identifier's log resolves to
    Path {
        /// Identifier naming the log stream
        #[arg(short, long)]
        identifier: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(CONFIG_FILE)?;

    match cli.command {
        Commands::Add {
            identifier,
            class,
            function,
            message,
            level,
            exception,
        } => cmd_add(
            &config,
            &identifier,
            &class,
            &function,
            &message,
            level,
            exception.as_deref(),
        ),
        Commands::Show { identifier } => cmd_show(&config, &identifier),
        Commands::Path { identifier } => cmd_path(&config, &identifier),
    }
}

fn file_meta(config: &Config) -> FileMeta {
    FileMeta::new(&config.file.prefix, &config.file.extension)
}

fn cmd_add(
    config: &Config,
    identifier: &str,
    class: &str,
    function: &str,
    message: &str,
    level: i64,
    exception: Option<&str>,
) -> Result<()> {
    let disk = Arc::new(LocalDisk::open(&config.storage.root)?);
    let mut log = EventLogger::new(identifier, disk, file_meta(config))?;

    match exception {
        Some(exception) => {
            log.add_event_with_exception(class, function, message, level, exception)?
        }
        None => log.add_event(class, function, message, level)?,
    }

    println!("Recorded event in {}", log.file_name());
    Ok(())
}

fn cmd_show(config: &Config, identifier: &str) -> Result<()> {
    let disk = LocalDisk::open(&config.storage.root)?;
    let name = format!("{}{identifier}{}", config.file.prefix, config.file.extension);

    let bytes = match disk.get(&name) {
        Ok(bytes) => bytes,
        Err(StorageError::NotFound(_)) => {
            return Err(Error::LogNotFound {
                identifier: identifier.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let doc = LogDocument::load(&bytes);
    println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
    Ok(())
}

fn cmd_path(config: &Config, identifier: &str) -> Result<()> {
    let disk = LocalDisk::open(&config.storage.root)?;
    let name = format!("{}{identifier}{}", config.file.prefix, config.file.extension);
    println!("{}", disk.path_of(&name).display());
    Ok(())
}
