//! CLI argument definitions.

use super::validators::parse_threshold;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Herbal-plant leaf classification with MobileNetV2 and ResNet50V2.
#[derive(Debug, Parser)]
#[command(name = "leafix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by every command.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the configuration file (default: platform config directory).
    #[arg(long, global = true, env = "LEAFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and informational logs.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace, -vvv: trace with ORT unfiltered).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a leaf photo with every configured model.
    ///
    /// The photo is validated and decoded first; then every model is loaded,
    /// and any model failure stops the command before classification.
    Classify(ClassifyArgs),
    /// Show the known species, or one species' taxonomy.
    Species {
        /// Label to show (case-insensitive), e.g. SIRIH.
        label: Option<String>,
    },
    /// Manage models.
    Models {
        /// Models action to perform.
        #[command(subcommand)]
        action: ModelsAction,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show how to take a photo the classifiers handle well.
    Guide,
}

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Leaf image (.jpg, .jpeg or .png).
    pub image: PathBuf,

    /// Minimum confidence for a recognized prediction (0.0-1.0).
    #[arg(short, long, value_parser = parse_threshold, env = "LEAFIX_THRESHOLD")]
    pub threshold: Option<f32>,

    /// Output format (text, json).
    #[arg(short, long, default_value_t = OutputFormat::Text, env = "LEAFIX_FORMAT")]
    pub format: OutputFormat,

    /// Directory reference tree images are resolved against.
    #[arg(long, env = "LEAFIX_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Disable the download progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Models subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ModelsAction {
    /// List configured models.
    List,
}
