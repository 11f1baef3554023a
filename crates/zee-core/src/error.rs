//! Error types for zee-core

use thiserror::Error;

/// Result type alias for zee-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and workflow operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent or workflow configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No model provider could be created for an agent
    #[error("Model provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),
}
