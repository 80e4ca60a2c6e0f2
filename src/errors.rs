//! Unified error type for orgdesk.
//!
//! Storage *reads* never produce errors for callers (see [`crate::core::store`]);
//! everything else funnels through [`Error`].

use thiserror::Error;

/// All errors that can occur in orgdesk.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Storage backend failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A record or settings bundle could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transaction amount was negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Sign-in was rejected; the message is shown to the user as-is
    #[error("{message}")]
    Authentication {
        /// Human-readable failure reason
        message: String,
    },

    /// An administrative operation was attempted without a signed-in user
    #[error("Not signed in")]
    NotSignedIn,

    /// The chart renderer could not draw a dataset
    #[error("Chart error: {message}")]
    Chart {
        /// Renderer-supplied reason
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
