//! UI screens.

mod app;
mod connect_screen;
mod portal_screen;

pub use app::App;
pub use connect_screen::{ConnectAction, ConnectScreen, ConnectState};
pub use portal_screen::{LoadState, PortalFocus, PortalKeyResult, PortalScreen, PortalScreenState};
