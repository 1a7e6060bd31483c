//! Command-line driver for the course/author admin core.
//!
//! # Responsibility
//! - Resolve configuration from env and flags, then start logging.
//! - Wire hub, stores and action creators against the mock DB file.

mod commands;

use clap::{Parser, Subcommand};
use courseflux_core::config::{DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
use courseflux_core::{init_logging, init_stderr_logging, AppConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "courseflux", version, about = "Course/author admin over a mock JSON DB")]
struct Cli {
    /// Mock DB document.
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    #[arg(long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, global = true, env = LOG_DIR_ENV)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the bundled sample data to the DB file.
    Seed,
    #[command(subcommand)]
    Courses(CourseCommand),
    #[command(subcommand)]
    Authors(AuthorCommand),
    /// Print the core version.
    Version,
}

#[derive(Debug, Subcommand)]
enum CourseCommand {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author_id: u64,
        #[arg(long)]
        category: String,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
enum AuthorCommand {
    List,
    Add { name: String },
    Delete { id: u64 },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };

    let logging = match &config.log_dir {
        Some(dir) => init_logging(&config.log_level, &dir.to_string_lossy()),
        None => init_stderr_logging(&config.log_level),
    };
    if let Err(message) = logging {
        eprintln!("warning: logging disabled: {message}");
    }

    match commands::run(&config, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Layers explicit flags over `COURSEFLUX_*` variables and defaults.
fn resolve_config(cli: &Cli) -> Result<AppConfig, String> {
    let mut config = AppConfig::from_env();
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    config.validate().map_err(|err| err.to_string())
}
