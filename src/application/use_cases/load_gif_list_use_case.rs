//! GIF list loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::PortalError;
use crate::domain::ports::{FetchOutcome, PortalPort};

/// Handles reading the portal feed.
#[derive(Clone)]
pub struct LoadGifListUseCase {
    portal_port: Arc<dyn PortalPort>,
}

impl LoadGifListUseCase {
    /// Creates new load use case.
    #[must_use]
    pub const fn new(portal_port: Arc<dyn PortalPort>) -> Self {
        Self { portal_port }
    }

    /// Reads the current entry list.
    ///
    /// # Errors
    /// Returns error if the chain read fails. A portal account that does
    /// not exist yet is not an error.
    pub async fn execute(&self) -> Result<FetchOutcome, PortalError> {
        debug!("Fetching gif list");

        match self.portal_port.fetch_entries().await {
            Ok(FetchOutcome::Entries(list)) => {
                info!(count = list.len(), "Got the gif list");
                Ok(FetchOutcome::Entries(list))
            }
            Ok(FetchOutcome::NotInitialized) => {
                info!("Portal account not created yet");
                Ok(FetchOutcome::NotInitialized)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch gif list");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GifEntry;
    use crate::domain::ports::mocks::MockPortalPort;
    use solana_sdk::pubkey::Pubkey;

    #[tokio::test]
    async fn test_load_returns_entries() {
        let entry = GifEntry::new("https://media.giphy.com/a.gif", Pubkey::new_unique());
        let portal = Arc::new(MockPortalPort::with_entries(vec![entry.clone()]));
        let use_case = LoadGifListUseCase::new(portal);

        let outcome = use_case.execute().await.unwrap();

        match outcome {
            FetchOutcome::Entries(list) => assert_eq!(list.entries(), &[entry]),
            FetchOutcome::NotInitialized => panic!("expected entries"),
        }
    }

    #[tokio::test]
    async fn test_missing_account_is_not_an_error() {
        let portal = Arc::new(MockPortalPort::uninitialized());
        let use_case = LoadGifListUseCase::new(portal);

        let outcome = use_case.execute().await.unwrap();

        assert_eq!(outcome, FetchOutcome::NotInitialized);
    }

    #[tokio::test]
    async fn test_rpc_failure_propagates() {
        let portal = Arc::new(MockPortalPort::uninitialized());
        portal.set_failing(true);
        let use_case = LoadGifListUseCase::new(portal);

        let result = use_case.execute().await;

        assert!(matches!(result, Err(PortalError::Rpc { .. })));
    }
}
