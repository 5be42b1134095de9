//! ColorPro Blueprint CLI - prints the canonical ColorPro backend architecture.
//!
//! Run `cpb` with no arguments to print the overview header followed by the
//! blueprint rendered as indented JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, show};
use config::Config;

/// ColorPro Blueprint CLI - print the backend architecture overview.
///
/// Run `cpb` or `cpb show` to print the blueprint to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "cpb",
    author,
    version,
    about = "ColorPro Blueprint: print the backend architecture overview",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the blueprint (default command).
    Show {
        /// Output format: json or tree.
        #[arg(short, long)]
        format: Option<String>,

        /// Spaces per nesting level.
        #[arg(short, long)]
        indent: Option<usize>,

        /// Write the rendering to a file instead of stdout.
        ///
        /// With no path, writes `blueprint.<ext>` into the configured
        /// output directory.
        #[arg(short, long)]
        output: Option<Option<PathBuf>>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    // Default to show if no command given
    let command = cli.command.unwrap_or(Commands::Show {
        format: None,
        indent: None,
        output: None,
    });

    match command {
        Commands::Show {
            format,
            indent,
            output,
        } => {
            show::execute(&config, format.as_deref(), indent, output)?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
