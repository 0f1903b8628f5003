//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{GifEntry, GifList, SelectionSet, WalletSession};
pub use errors::{PortalError, WalletError};
pub use ports::{FetchOutcome, PortalPort, WalletPort};
