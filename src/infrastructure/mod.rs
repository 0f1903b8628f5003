//! Infrastructure layer with chain, wallet, and configuration adapters.

/// Chain access adapters.
pub mod chain;
/// Application configuration.
pub mod config;
/// Wallet provider adapters.
pub mod wallet;

pub use chain::{BaseAccount, ClientContext, PortalClient};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use wallet::KeypairWallet;
