//! Domain error types.

mod portal_error;
mod wallet_error;

pub use portal_error::PortalError;
pub use wallet_error::WalletError;
