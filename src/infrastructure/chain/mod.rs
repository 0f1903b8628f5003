//! Chain access adapters for the portal program.

mod base_account;
mod codec;
mod context;
mod interface;
mod portal_client;

pub use base_account::BaseAccount;
pub use context::ClientContext;
pub use interface::{ProgramHandle, ProgramInterface};
pub use portal_client::PortalClient;
