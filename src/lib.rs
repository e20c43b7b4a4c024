//! Leafix - herbal-plant leaf classification CLI tool.
//!
//! This crate classifies leaf photos with two independently trained image
//! classifiers (MobileNetV2 and ResNet50V2) and reports each model's verdict
//! alongside the plant's taxonomy.

#![warn(missing_docs)]
#![allow(clippy::print_stdout)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod inference;
pub mod input;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod taxonomy;

use clap::Parser;
use cli::{ClassifyArgs, Cli, Command, ConfigAction, ModelsAction};
use config::{Config, load_config, resolve_config_path, save_config};
use inference::LeafModel;
use input::Upload;
use model::ModelProvider;
use output::OutputFormat;
use pipeline::ClassificationService;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use error::{Error, ErrorKind, Result};

/// Main entry point for leafix CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    let config_path = cli.global.config.as_deref();

    match cli.command {
        Command::Classify(args) => {
            let config = load_config(config_path)?;
            classify_file(&args, &config, cli.global.quiet)
        }
        Command::Species { label } => handle_species_command(label.as_deref()),
        Command::Models { action } => {
            let config = load_config(config_path)?;
            handle_models_command(action, &config)
        }
        Command::Config { action } => handle_config_command(action, config_path),
        Command::Guide => {
            cli::help::print_guide();
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));

    // Logs go to stderr so JSON reports on stdout stay parseable.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Default filter for a verbosity level.
///
/// ORT logging is suppressed unless explicitly requested; `-vvv` leaves it
/// unfiltered at trace.
const fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn,ort=off";
    }
    match verbose {
        0 => "info,ort=off",
        1 => "debug,ort=warn",
        2 => "trace,ort=info",
        _ => "trace",
    }
}

/// Validate, decode, load models and classify one image.
fn classify_file(args: &ClassifyArgs, config: &Config, quiet: bool) -> Result<()> {
    let result = classify_report(args, config, quiet);

    match (result, args.format) {
        (Ok(report), OutputFormat::Text) => {
            print!("{}", output::text::render_report(&report));
            Ok(())
        }
        (Ok(report), OutputFormat::Json) => {
            println!("{}", output::json::render_report(&report)?);
            Ok(())
        }
        (Err(e), OutputFormat::Json) => {
            println!("{}", output::json::render_error(&e)?);
            Err(e)
        }
        (Err(e), OutputFormat::Text) => Err(e),
    }
}

fn classify_report(args: &ClassifyArgs, config: &Config, quiet: bool) -> Result<pipeline::Report> {
    // The upload is checked before any model is fetched.
    let upload = Upload::from_path(&args.image)?;
    let image = upload.decode()?;

    let threshold = args.threshold.unwrap_or(config.defaults.threshold);
    let assets_dir = args
        .assets_dir
        .clone()
        .unwrap_or_else(|| config.defaults.assets_dir.clone());

    inference::init_runtime()?;

    let sources = config.model_sources()?;
    let provider = ModelProvider::new(config.download.settings(!quiet && !args.no_progress))?;

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;
    let models = runtime.block_on(provider.load_all(&sources))?;
    info!("{} models ready", models.len());

    let models: Vec<Arc<dyn LeafModel>> = models
        .into_iter()
        .map(|m| m as Arc<dyn LeafModel>)
        .collect();

    let service = ClassificationService::new(models, threshold, assets_dir)?;
    service.classify_image(upload.file_name(), &image)
}

fn handle_species_command(label: Option<&str>) -> Result<()> {
    match label {
        Some(label) => {
            let record = taxonomy::lookup(&label.trim().to_uppercase())?;
            print!("{}", output::text::render_species(record));
        }
        None => print!("{}", output::text::render_species_list()),
    }
    Ok(())
}

fn handle_models_command(action: ModelsAction, config: &Config) -> Result<()> {
    match action {
        ModelsAction::List => {
            println!("Configured models:");
            for source in config.model_sources()? {
                println!("  {}", source.name);
                println!("    Source: {}", source.location);
                if let Some(sha256) = &source.sha256 {
                    println!("    SHA-256: {sha256}");
                }
            }
            Ok(())
        }
    }
}

fn handle_config_command(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = resolve_config_path(explicit)?;
            if path.exists() && !force {
                println!("Configuration file already exists: {}", path.display());
                println!("Use --force to overwrite it with defaults.");
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let contents =
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_config_path(explicit)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(0, false), "info,ort=off");
        assert_eq!(log_filter(1, false), "debug,ort=warn");
        assert_eq!(log_filter(2, false), "trace,ort=info");
        assert_eq!(log_filter(3, false), "trace");
        assert_eq!(log_filter(5, false), "trace");
        assert_eq!(log_filter(3, true), "warn,ort=off");
    }
}
