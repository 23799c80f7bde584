use thiserror::Error;

use crate::{docs::DocsError, model::ModelError};

/// Top-level error type for dumpdoc operations.
#[derive(Error, Debug)]
pub enum DumpdocError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Docs error: {0}")]
    Docs(#[from] DocsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DumpdocError>;
