//! Port definitions.

mod portal_port;
mod wallet_port;

pub use portal_port::{FetchOutcome, PortalPort};
pub use wallet_port::WalletPort;

#[cfg(test)]
pub mod mocks {
    pub use super::portal_port::mock::MockPortalPort;
    pub use super::wallet_port::mock::MockWalletPort;
}
