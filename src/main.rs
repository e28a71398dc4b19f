//! Portal Kit - Provisioning tools for the portal frontend
//!
//! This is the main entry point for the portal-kit CLI. It parses the
//! command line, loads the configuration, and dispatches to the setup or
//! import-fixing sequence.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use portal_kit::config::Config;
use portal_kit::filesystem::RealFileSystem;
use portal_kit::imports;
use portal_kit::privileged::SudoOps;
use portal_kit::setup;

/// Command-line arguments for Portal Kit
#[derive(Parser)]
#[command(name = "portal-kit")]
#[command(about = "Provisioning tools for the portal frontend", long_about = None)]
struct Cli {
    /// Print version information
    #[arg(short, long)]
    version: bool,

    /// Configuration file overriding the built-in paths
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create the portal directory tree and copy the staged files into it
    Setup,
    /// Normalize import strings in the extracted UI component files
    FixImports,
}

/// Main entry point for Portal Kit
///
/// The exit code reflects only whether the selected sequence ran to
/// completion; privileged steps that fail along the way are reported on
/// stderr without changing it.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("portal-kit v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Command::Setup) => {
            let fs = RealFileSystem::new();
            setup::run_setup(&config.setup, &fs, &SudoOps::new())?;
        }
        Some(Command::FixImports) => {
            let fs = RealFileSystem::new();
            imports::fix_imports(&config.imports, &fs)?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
