//! Error types for the editor's outer surfaces.
//!
//! Placement and manipulation are total and never fail; only parsing host
//! input, reading files and talking to the runtime can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// A host command could not be parsed
    #[error("Invalid command JSON: {0}")]
    InvalidCommand(#[source] serde_json::Error),

    /// The design could not be serialized
    #[error("Design export failed: {0}")]
    Export(#[source] serde_json::Error),

    /// Settings file could not be read or written
    #[error("Settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog records were unusable
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The runtime refused a fullscreen request
    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),
}

pub type EditorResult<T> = Result<T, EditorError>;
