//! Wallet port definition.

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::transaction::Transaction;

use crate::domain::entities::WalletSession;
use crate::domain::errors::WalletError;

/// Port for wallet provider operations.
#[async_trait]
pub trait WalletPort: Send + Sync {
    /// Establishes a session with the wallet provider.
    ///
    /// With `only_if_trusted` set, the provider connects only when it has
    /// previously marked this client as trusted.
    async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError>;

    /// Signs the transaction with the wallet key.
    async fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> Result<(), WalletError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use solana_sdk::pubkey::Pubkey;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock wallet port for testing.
    pub struct MockWalletPort {
        identity: Pubkey,
        missing: bool,
        trusted: bool,
        connect_calls: AtomicUsize,
        sign_calls: AtomicUsize,
    }

    impl MockWalletPort {
        fn with_flags(missing: bool, trusted: bool) -> Self {
            Self {
                identity: Pubkey::new_unique(),
                missing,
                trusted,
                connect_calls: AtomicUsize::new(0),
                sign_calls: AtomicUsize::new(0),
            }
        }

        /// Creates a present, trusted wallet.
        pub fn trusted() -> Self {
            Self::with_flags(false, true)
        }

        /// Creates a present wallet that refuses trusted-only connects.
        pub fn untrusted() -> Self {
            Self::with_flags(false, false)
        }

        /// Creates an absent wallet provider.
        pub fn missing() -> Self {
            Self::with_flags(true, false)
        }

        /// Returns the wallet identity.
        pub fn identity(&self) -> Pubkey {
            self.identity
        }

        /// Returns how many connects were attempted.
        pub fn connect_calls(&self) -> usize {
            self.connect_calls.load(Ordering::SeqCst)
        }

        /// Returns how many signatures were requested.
        pub fn sign_calls(&self) -> usize {
            self.sign_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WalletPort for MockWalletPort {
        async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError> {
            self.connect_calls.fetch_add(1, Ordering::SeqCst);

            if self.missing {
                return Err(WalletError::ProviderMissing);
            }
            if only_if_trusted && !self.trusted {
                return Err(WalletError::refused("mock wallet is not trusted"));
            }
            Ok(WalletSession::new(self.identity))
        }

        async fn sign_transaction(
            &self,
            _transaction: &mut Transaction,
            _recent_blockhash: Hash,
        ) -> Result<(), WalletError> {
            self.sign_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
