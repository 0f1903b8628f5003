//! Wallet provider adapters.

mod keypair_wallet;

pub use keypair_wallet::KeypairWallet;
