//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal carousel for a deck of featured projects
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about = "Present a project deck as a terminal carousel", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Deck file to present (default: built-in sample deck)
    #[arg(short, long)]
    pub deck: Option<PathBuf>,

    /// Disable autoplay on start
    #[arg(long)]
    pub no_autoplay: bool,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Disable mouse capture (no swipe or hover handling)
    #[arg(long)]
    pub no_mouse: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the slides in the deck
    Slides,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
