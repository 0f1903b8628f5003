//! Keypair-file wallet provider.

use std::path::PathBuf;

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::signature::{Keypair, read_keypair_file};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::domain::entities::WalletSession;
use crate::domain::errors::WalletError;
use crate::domain::ports::WalletPort;
use crate::infrastructure::config::WalletConfig;

/// Wallet provider backed by a local keypair file.
///
/// Owns the signing key, hands out only the public identity on connect,
/// and signs transactions on request. The file is read again for every
/// operation; nothing secret stays resident between calls.
pub struct KeypairWallet {
    keypair_path: PathBuf,
    trusted: bool,
}

impl KeypairWallet {
    /// Creates a wallet over the configured keypair file.
    #[must_use]
    pub fn new(config: &WalletConfig) -> Self {
        Self {
            keypair_path: config.effective_keypair_path(),
            trusted: config.auto_connect,
        }
    }

    fn load_keypair(&self) -> Result<Keypair, WalletError> {
        if !self.keypair_path.exists() {
            return Err(WalletError::ProviderMissing);
        }
        read_keypair_file(&self.keypair_path)
            .map_err(|e| WalletError::invalid_keypair(e.to_string()))
    }
}

#[async_trait]
impl WalletPort for KeypairWallet {
    async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError> {
        let keypair = self.load_keypair()?;

        if only_if_trusted && !self.trusted {
            return Err(WalletError::refused(
                "wallet is not configured for auto connect",
            ));
        }

        debug!(path = %self.keypair_path.display(), "Loaded wallet keypair");
        Ok(WalletSession::new(keypair.pubkey()))
    }

    async fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> Result<(), WalletError> {
        let keypair = self.load_keypair()?;

        transaction
            .try_partial_sign(&[&keypair], recent_blockhash)
            .map_err(|e| WalletError::signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::system_instruction;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_keypair(dir: &Path) -> (PathBuf, Keypair) {
        let keypair = Keypair::new();
        let path = dir.join("id.json");
        let bytes = keypair.to_bytes().to_vec();
        std::fs::write(&path, serde_json::to_string(&bytes).unwrap()).unwrap();
        (path, keypair)
    }

    fn config_for(path: PathBuf, auto_connect: bool) -> WalletConfig {
        WalletConfig {
            keypair_path: Some(path),
            auto_connect,
        }
    }

    #[tokio::test]
    async fn test_connect_exposes_keypair_identity() {
        let dir = tempdir().unwrap();
        let (path, keypair) = write_keypair(dir.path());
        let wallet = KeypairWallet::new(&config_for(path, true));

        let session = wallet.connect(true).await.unwrap();

        assert_eq!(session.identity(), keypair.pubkey());
    }

    #[tokio::test]
    async fn test_missing_file_is_provider_missing() {
        let dir = tempdir().unwrap();
        let wallet = KeypairWallet::new(&config_for(dir.path().join("absent.json"), true));

        let result = wallet.connect(false).await;

        assert!(matches!(result, Err(WalletError::ProviderMissing)));
    }

    #[tokio::test]
    async fn test_trusted_gate_refuses_when_not_auto_connect() {
        let dir = tempdir().unwrap();
        let (path, _) = write_keypair(dir.path());
        let wallet = KeypairWallet::new(&config_for(path, false));

        let result = wallet.connect(true).await;

        assert!(matches!(result, Err(WalletError::ConnectionRefused { .. })));
    }

    #[tokio::test]
    async fn test_explicit_connect_ignores_trust_gate() {
        let dir = tempdir().unwrap();
        let (path, keypair) = write_keypair(dir.path());
        let wallet = KeypairWallet::new(&config_for(path, false));

        let session = wallet.connect(false).await.unwrap();

        assert_eq!(session.identity(), keypair.pubkey());
    }

    #[tokio::test]
    async fn test_garbage_file_is_invalid_keypair() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("id.json");
        std::fs::write(&path, "not a keypair").unwrap();
        let wallet = KeypairWallet::new(&config_for(path, true));

        let result = wallet.connect(false).await;

        assert!(matches!(result, Err(WalletError::InvalidKeypair { .. })));
    }

    #[tokio::test]
    async fn test_sign_transaction_adds_signature() {
        let dir = tempdir().unwrap();
        let (path, keypair) = write_keypair(dir.path());
        let wallet = KeypairWallet::new(&config_for(path, true));

        let instruction =
            system_instruction::transfer(&keypair.pubkey(), &Pubkey::new_unique(), 1);
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&keypair.pubkey()));

        wallet
            .sign_transaction(&mut transaction, Hash::default())
            .await
            .unwrap();

        assert!(transaction.is_signed());
    }
}
