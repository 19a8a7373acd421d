//! Error types for extraction, delivery, and configuration.
//!
//! Every failure is caught at the boundary of the operation that produced
//! it: a failed fetch leaves the snapshot untouched, a failed send is not
//! retried, and a missing credential only fails the operation that needed
//! it. Nothing here terminates the process.

use thiserror::Error;

/// Failure while fetching or extracting the listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected response status: {status} from {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },
}

/// Failure while rendering or delivering the digest email.
#[derive(Debug, Error)]
pub enum SendError {
    /// Mail settings were missing or invalid when the send was attempted.
    #[error("mail configuration: {0}")]
    Config(#[from] ConfigError),

    /// A sender or recipient address could not be parsed as a mailbox.
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message itself could not be composed.
    #[error("failed to compose message: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connect, STARTTLS upgrade, authentication, or submission failed.
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A required configuration value is missing or unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: String,
    },
}
