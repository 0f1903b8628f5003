//! Portal program port definition.

use async_trait::async_trait;

use crate::domain::entities::{GifList, WalletSession};
use crate::domain::errors::PortalError;

/// Result of reading the portal account.
///
/// A missing account is an expected state of a fresh deployment, not a
/// failure, so it is kept apart from the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The portal account exists and decoded cleanly.
    Entries(GifList),
    /// The portal account has not been created yet.
    NotInitialized,
}

/// Port for portal program operations.
#[async_trait]
pub trait PortalPort: Send + Sync {
    /// Reads the current entry list from the chain.
    async fn fetch_entries(&self) -> Result<FetchOutcome, PortalError>;

    /// Creates the portal account, paid for and signed by the session wallet.
    async fn initialize_account(&self, session: &WalletSession) -> Result<(), PortalError>;

    /// Appends a new entry under the session identity.
    async fn append_entry(
        &self,
        session: &WalletSession,
        link: &str,
    ) -> Result<(), PortalError>;
}
