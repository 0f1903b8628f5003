//! Wallet connection use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::WalletSession;
use crate::domain::errors::WalletError;
use crate::domain::ports::WalletPort;

/// Outcome of a connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A session was established.
    Connected(WalletSession),
    /// No wallet provider is present.
    ProviderMissing,
    /// The provider declined a trusted-only connect.
    Declined,
}

/// Handles the wallet connection workflow.
#[derive(Clone)]
pub struct ConnectWalletUseCase {
    wallet_port: Arc<dyn WalletPort>,
}

impl ConnectWalletUseCase {
    /// Creates new connect use case.
    #[must_use]
    pub const fn new(wallet_port: Arc<dyn WalletPort>) -> Self {
        Self { wallet_port }
    }

    /// Attempts to establish a wallet session.
    ///
    /// The eager startup check passes `only_if_trusted` so a wallet that
    /// never approved this client is not connected without being asked. A
    /// missing provider and a declined trusted connect are ordinary
    /// outcomes; everything else is an error.
    ///
    /// # Errors
    /// Returns error if the provider is present but unusable.
    pub async fn execute(&self, only_if_trusted: bool) -> Result<ConnectOutcome, WalletError> {
        debug!(only_if_trusted, "Attempting wallet connection");

        match self.wallet_port.connect(only_if_trusted).await {
            Ok(session) => {
                info!(identity = %session.identity(), "Connected with wallet");
                Ok(ConnectOutcome::Connected(session))
            }
            Err(WalletError::ProviderMissing) => {
                warn!("No wallet provider found");
                Ok(ConnectOutcome::ProviderMissing)
            }
            Err(WalletError::ConnectionRefused { reason }) => {
                debug!(reason = %reason, "Trusted-only connection declined");
                Ok(ConnectOutcome::Declined)
            }
            Err(e) => {
                warn!(error = %e, "Wallet connection failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockWalletPort;

    #[tokio::test]
    async fn test_connect_returns_provider_identity() {
        let wallet = Arc::new(MockWalletPort::trusted());
        let identity = wallet.identity();
        let use_case = ConnectWalletUseCase::new(wallet);

        let outcome = use_case.execute(true).await.unwrap();

        assert_eq!(
            outcome,
            ConnectOutcome::Connected(WalletSession::new(identity))
        );
    }

    #[tokio::test]
    async fn test_missing_provider_is_an_outcome() {
        let wallet = Arc::new(MockWalletPort::missing());
        let use_case = ConnectWalletUseCase::new(wallet.clone());

        let eager = use_case.execute(true).await.unwrap();
        let manual = use_case.execute(false).await.unwrap();

        assert_eq!(eager, ConnectOutcome::ProviderMissing);
        assert_eq!(manual, ConnectOutcome::ProviderMissing);
        assert_eq!(wallet.connect_calls(), 2);
    }

    #[tokio::test]
    async fn test_untrusted_wallet_declines_eager_connect() {
        let wallet = Arc::new(MockWalletPort::untrusted());
        let use_case = ConnectWalletUseCase::new(wallet);

        let outcome = use_case.execute(true).await.unwrap();

        assert_eq!(outcome, ConnectOutcome::Declined);
    }

    #[tokio::test]
    async fn test_untrusted_wallet_accepts_explicit_connect() {
        let wallet = Arc::new(MockWalletPort::untrusted());
        let identity = wallet.identity();
        let use_case = ConnectWalletUseCase::new(wallet);

        let outcome = use_case.execute(false).await.unwrap();

        assert_eq!(
            outcome,
            ConnectOutcome::Connected(WalletSession::new(identity))
        );
    }
}
