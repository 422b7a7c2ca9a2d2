//! Error types for the license issuing crate.

use thiserror::Error;

/// Errors produced while encoding, signing, or provisioning licenses.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The secure random source could not produce bytes.
    #[error("secure random source unavailable: {0}")]
    Rng(String),

    /// The record contains values that cannot be serialized.
    #[error("cannot serialize license record: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The signing primitive itself failed.
    #[error("signing failed: {0}")]
    Signing(#[from] rsa::Error),

    /// The private key PEM is missing or unparseable.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The certificate PEM is missing or unparseable.
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// Key material could not be read from disk.
    #[error("cannot read key material: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
