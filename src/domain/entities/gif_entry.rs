//! GIF entry and list entities.

use solana_sdk::pubkey::Pubkey;

/// A single GIF link recorded on the portal, along with its submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifEntry {
    link: String,
    submitter: Pubkey,
}

impl GifEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(link: impl Into<String>, submitter: Pubkey) -> Self {
        Self {
            link: link.into(),
            submitter,
        }
    }

    /// Returns the GIF link.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Returns the submitter identity.
    #[must_use]
    pub const fn submitter(&self) -> Pubkey {
        self.submitter
    }
}

/// The full portal feed as read from the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GifList {
    total_submissions: u64,
    entries: Vec<GifEntry>,
}

impl GifList {
    /// Creates a list from a running submission counter and its entries.
    #[must_use]
    pub const fn new(total_submissions: u64, entries: Vec<GifEntry>) -> Self {
        Self {
            total_submissions,
            entries,
        }
    }

    /// Returns the running submission counter kept by the program.
    #[must_use]
    pub const fn total_submissions(&self) -> u64 {
        self.total_submissions
    }

    /// Returns the entries in submission order.
    #[must_use]
    pub fn entries(&self) -> &[GifEntry] {
        &self.entries
    }

    /// Returns the number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
