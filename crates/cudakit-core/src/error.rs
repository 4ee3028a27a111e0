use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    // Platform detection errors
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    // Configuration errors
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    // Activation hook errors
    #[error("Activation script not found: {0}")]
    MissingScript(PathBuf),

    // Download errors
    #[error("Download failed for {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Checksum mismatch for {blob}: {reason}")]
    ChecksumMismatch { blob: String, reason: String },

    // Extraction errors
    #[error("Extraction failed: {command}: {reason}")]
    ExtractionProcess { command: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InstallError>;
