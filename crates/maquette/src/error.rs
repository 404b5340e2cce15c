//! Error types for maquette operations.
//!
//! This module provides the main error type [`MaquetteError`] which wraps the
//! error conditions that can occur while building, serializing, or loading a
//! workspace.

use std::{io, path::PathBuf};

use thiserror::Error;

use maquette_core::{documentation::DocumentationError, model::ModelError, style::StyleError};

use crate::views::ViewError;

/// The main error type for maquette operations.
#[derive(Debug, Error)]
pub enum MaquetteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("View error: {0}")]
    View(#[from] ViewError),

    #[error("Documentation error: {0}")]
    Documentation(#[from] DocumentationError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Workspace file not found: {0}")]
    MissingFile(PathBuf),
}
