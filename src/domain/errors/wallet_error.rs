//! Wallet error types.

use thiserror::Error;

/// Wallet error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum WalletError {
    #[error("no wallet provider available")]
    ProviderMissing,

    #[error("wallet connection refused: {reason}")]
    ConnectionRefused { reason: String },

    #[error("wallet keypair unusable: {message}")]
    InvalidKeypair { message: String },

    #[error("wallet failed to sign transaction: {message}")]
    SigningFailed { message: String },
}

impl WalletError {
    /// Creates connection refused error.
    #[must_use]
    pub fn refused(reason: impl Into<String>) -> Self {
        Self::ConnectionRefused {
            reason: reason.into(),
        }
    }

    /// Creates invalid keypair error.
    #[must_use]
    pub fn invalid_keypair(message: impl Into<String>) -> Self {
        Self::InvalidKeypair {
            message: message.into(),
        }
    }

    /// Creates signing failed error.
    #[must_use]
    pub fn signing(message: impl Into<String>) -> Self {
        Self::SigningFailed {
            message: message.into(),
        }
    }
}
