//! Portal error types.

use thiserror::Error;

use super::WalletError;

/// Portal error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PortalError {
    #[error("rpc request failed: {message}")]
    Rpc { message: String },

    #[error("program interface unavailable: {message}")]
    InterfaceUnavailable { message: String },

    #[error("malformed program interface: {message}")]
    MalformedInterface { message: String },

    #[error("operation not exposed by program interface: {name}")]
    UnsupportedOperation { name: String },

    #[error("malformed portal account: {message}")]
    MalformedAccount { message: String },

    #[error("failed to encode instruction data: {message}")]
    Encoding { message: String },

    #[error("bundled portal keypair is invalid: {message}")]
    BundledKeypair { message: String },

    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
}

impl PortalError {
    /// Creates rpc error.
    #[must_use]
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    /// Creates interface unavailable error.
    #[must_use]
    pub fn interface_unavailable(message: impl Into<String>) -> Self {
        Self::InterfaceUnavailable {
            message: message.into(),
        }
    }

    /// Creates malformed interface error.
    #[must_use]
    pub fn malformed_interface(message: impl Into<String>) -> Self {
        Self::MalformedInterface {
            message: message.into(),
        }
    }

    /// Creates unsupported operation error.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation { name: name.into() }
    }

    /// Creates malformed account error.
    #[must_use]
    pub fn malformed_account(message: impl Into<String>) -> Self {
        Self::MalformedAccount {
            message: message.into(),
        }
    }

    /// Creates encoding error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Creates bundled keypair error.
    #[must_use]
    pub fn bundled_keypair(message: impl Into<String>) -> Self {
        Self::BundledKeypair {
            message: message.into(),
        }
    }
}
