//! Unified error type for framegen.

use thiserror::Error;

/// Errors that can occur while generating frames.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The imaging backend cannot encode the output format.
    #[error(
        "{format} encoding is not available in this build. \
         Rebuild with the `{feature}` feature of the `image` crate enabled, e.g. \
         `image = {{ version = \"0.25\", features = [\"{feature}\"] }}`"
    )]
    MissingCapability {
        /// Human-readable format name.
        format: &'static str,
        /// Cargo feature of the `image` crate that provides it.
        feature: &'static str,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The canvas could not be encoded or written.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// A frame specification would produce a degenerate layout.
    #[error("Invalid frame '{name}': {reason}")]
    InvalidFrame {
        /// Internal name of the offending frame.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The slot manifest could not be serialized.
    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),
}
