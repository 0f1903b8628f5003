//! Wallet session entity.

use solana_sdk::pubkey::Pubkey;

/// An established wallet session.
///
/// Holds only the public identity of the connected wallet. Signing stays
/// behind the wallet port so key material never crosses into the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletSession {
    identity: Pubkey,
}

impl WalletSession {
    /// Creates a session for the given identity.
    #[must_use]
    pub const fn new(identity: Pubkey) -> Self {
        Self { identity }
    }

    /// Returns the wallet identity.
    #[must_use]
    pub const fn identity(&self) -> Pubkey {
        self.identity
    }

    /// Returns the identity shortened for display.
    #[must_use]
    pub fn short_identity(&self) -> String {
        short_identity(&self.identity)
    }
}

/// Shortens a base58 identity to its first and last eight characters.
#[must_use]
pub fn short_identity(identity: &Pubkey) -> String {
    let full = identity.to_string();
    if full.len() <= 16 {
        return full;
    }
    format!("{}........{}", &full[..8], &full[full.len() - 8..])
}
