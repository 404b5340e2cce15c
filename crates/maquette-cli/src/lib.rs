//! CLI logic for the maquette workspace generator.
//!
//! The CLI builds the showcase workspace and writes it to a JSON file. When
//! the file already exists from a previous run, saved layout information is
//! merged into the fresh workspace before it is overwritten, so positions
//! placed by a diagram editor survive regeneration.

pub mod config;

mod args;
mod showcase;

pub use args::Args;

use std::{fs, path::Path};

use log::info;
use thiserror::Error;

use maquette::{MaquetteError, Workspace};

use config::ConfigError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Maquette(#[from] MaquetteError),
}

/// Run the maquette CLI application
///
/// This function builds the showcase workspace, merges layout information
/// from an existing output file if there is one, and writes the result.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Workspace construction errors (invalid configured colors)
/// - File I/O and serialization errors
pub fn run(args: &Args) -> Result<(), CliError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // The command line wins over the configuration file.
    let output = args
        .output
        .as_deref()
        .unwrap_or_else(|| app_config.output().path());

    info!(output_path = output; "Generating workspace");

    // Build the workspace
    let mut workspace = showcase::build(&app_config)?;

    // Merge layout information from the previous generation, if any
    if Path::new(output).exists() {
        let existing = Workspace::load_from_file(output)?;
        workspace.copy_layout_information_from(&existing);
    }

    // Write output file
    if app_config.output().pretty() {
        workspace.save_to_file(output)?;
    } else {
        write_compact(&workspace, output)?;
    }

    info!(output_file = output; "Workspace exported successfully");

    Ok(())
}

fn write_compact(workspace: &Workspace, output: &str) -> Result<(), MaquetteError> {
    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(MaquetteError::Io)?;
        }
    }
    let json = workspace.to_json()?;
    fs::write(path, json).map_err(MaquetteError::Io)?;
    Ok(())
}
