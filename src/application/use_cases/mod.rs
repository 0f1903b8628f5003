//! Use case implementations.

mod connect_wallet_use_case;
mod initialize_portal_use_case;
mod load_gif_list_use_case;
mod submit_gif_use_case;

pub use connect_wallet_use_case::{ConnectOutcome, ConnectWalletUseCase};
pub use initialize_portal_use_case::InitializePortalUseCase;
pub use load_gif_list_use_case::LoadGifListUseCase;
pub use submit_gif_use_case::{SubmitGifUseCase, SubmitOutcome};
