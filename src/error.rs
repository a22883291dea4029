use std::path::PathBuf;

use thiserror::Error;

/// Error types for the page host
#[derive(Error, Debug)]
pub enum HostError {
    /// Configuration could not be assembled from defaults, file and environment
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The bind address is not `IP:PORT`
    #[error("Invalid bind address '{0}'")]
    InvalidBindAddress(String),

    /// The compiled frontend directory is missing
    #[error("Static directory {} does not exist", .0.display())]
    MissingStaticDir(PathBuf),

    /// The compiled frontend has no entry page
    #[error("Index page not found at {}", .0.display())]
    MissingIndex(PathBuf),
}
