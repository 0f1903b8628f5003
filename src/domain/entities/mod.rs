//! Domain entity definitions.

mod gif_entry;
mod selection;
mod session;

pub use gif_entry::{GifEntry, GifList};
pub use selection::{Partition, SelectionSet};
pub use session::{WalletSession, short_identity};
