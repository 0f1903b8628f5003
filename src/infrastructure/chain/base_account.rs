//! Bundled feed account keypair.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use zeroize::Zeroize;

use crate::domain::errors::PortalError;

const BUNDLED_KEYPAIR_JSON: &str = include_str!("../../../assets/base-account.json");

/// The keypair of the shared feed account.
///
/// Every client ships the same keypair, so they all read and write one
/// feed. It pays nothing and owns nothing; it only co-signs the one-time
/// account creation.
pub struct BaseAccount {
    keypair: Keypair,
}

impl BaseAccount {
    /// Loads the keypair bundled into the binary.
    ///
    /// # Errors
    /// Returns `PortalError::BundledKeypair` if the bundled asset does
    /// not hold a valid keypair.
    pub fn bundled() -> Result<Self, PortalError> {
        Self::from_json(BUNDLED_KEYPAIR_JSON)
    }

    fn from_json(json: &str) -> Result<Self, PortalError> {
        let mut bytes: Vec<u8> =
            serde_json::from_str(json).map_err(|e| PortalError::bundled_keypair(e.to_string()))?;
        let keypair =
            Keypair::from_bytes(&bytes).map_err(|e| PortalError::bundled_keypair(e.to_string()));
        bytes.zeroize();
        Ok(Self { keypair: keypair? })
    }

    /// Returns the feed account address.
    #[must_use]
    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Returns the keypair for co-signing account creation.
    pub(crate) const fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}
