//! Error types for the c_cpp_properties generator

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration generation
#[derive(Error, Debug)]
pub enum PropsError {
    #[error("No {board} SDK found under the Arduino15 packages directory")]
    SdkNotFound { board: String },

    #[error("Board core not found: {} has no version directories", .0.display())]
    CoreNotFound(PathBuf),

    #[error("Cross-compiler not found: {0}")]
    CompilerNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PropsError>;
