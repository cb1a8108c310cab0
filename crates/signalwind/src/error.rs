//! Crate-level error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::compose::CompositionError;
use crate::config::ConfigError;
use crate::mount::{DocumentError, MountError};

/// Any error the build or bootstrap pipeline can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Composition(#[from] CompositionError),
    #[error(transparent)]
    Mount(#[from] MountError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid content pattern `{pattern}`: {reason}")]
    ContentPattern { pattern: String, reason: String },
    #[error("failed to read {path}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to render stylesheet: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
