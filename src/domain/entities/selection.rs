//! Viewer-side submitter selection.

use solana_sdk::pubkey::Pubkey;

use super::gif_entry::GifEntry;

/// The set of submitter identities the viewer has pinned.
///
/// Selection is a pure view concern: it never leaves the client and is not
/// persisted. Identities keep their pin order, which is also the order the
/// pills row shows them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    identities: Vec<Pubkey>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            identities: Vec::new(),
        }
    }

    /// Pins a submitter. Returns whether the identity was newly added.
    ///
    /// Pinning is add-only: selecting an already pinned identity is a no-op.
    pub fn select(&mut self, identity: Pubkey) -> bool {
        if self.contains(&identity) {
            return false;
        }
        self.identities.push(identity);
        true
    }

    /// Unpins a submitter. Returns whether it was present.
    pub fn remove(&mut self, identity: &Pubkey) -> bool {
        let before = self.identities.len();
        self.identities.retain(|pinned| pinned != identity);
        self.identities.len() != before
    }

    /// Returns whether the identity is pinned.
    #[must_use]
    pub fn contains(&self, identity: &Pubkey) -> bool {
        self.identities.contains(identity)
    }

    /// Returns the pinned identities in pin order.
    #[must_use]
    pub fn identities(&self) -> &[Pubkey] {
        &self.identities
    }

    /// Returns the number of pinned identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns whether nothing is pinned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Splits entries into the pinned group and the rest.
    ///
    /// Every entry lands in exactly one group and keeps its list order
    /// within that group. The split is recomputed from scratch on every
    /// call rather than cached.
    #[must_use]
    pub fn partition<'a>(&self, entries: &'a [GifEntry]) -> Partition<'a> {
        let (selected, others) = entries
            .iter()
            .partition(|entry| self.contains(&entry.submitter()));

        Partition { selected, others }
    }
}

/// Result of splitting a list of entries by selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    selected: Vec<&'a GifEntry>,
    others: Vec<&'a GifEntry>,
}

impl<'a> Partition<'a> {
    /// Entries whose submitter is pinned, in list order.
    #[must_use]
    pub fn selected(&self) -> &[&'a GifEntry] {
        &self.selected
    }

    /// Entries whose submitter is not pinned, in list order.
    #[must_use]
    pub fn others(&self) -> &[&'a GifEntry] {
        &self.others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_for(submitters: &[Pubkey]) -> Vec<GifEntry> {
        submitters
            .iter()
            .enumerate()
            .map(|(i, submitter)| GifEntry::new(format!("gif-{i}"), *submitter))
            .collect()
    }

    #[test]
    fn test_select_is_add_only() {
        let identity = Pubkey::new_unique();
        let mut selection = SelectionSet::new();

        assert!(selection.select(identity));
        assert!(!selection.select(identity));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&identity));
    }

    #[test]
    fn test_remove_unpins() {
        let identity = Pubkey::new_unique();
        let mut selection = SelectionSet::new();
        selection.select(identity);

        assert!(selection.remove(&identity));
        assert!(!selection.remove(&identity));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_pin_order_is_kept() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut selection = SelectionSet::new();
        selection.select(first);
        selection.select(second);

        assert_eq!(selection.identities(), &[first, second]);
    }

    #[test]
    fn test_partition_covers_every_entry_once() {
        let pinned = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let entries = entries_for(&[pinned, other, pinned, other, pinned]);

        let mut selection = SelectionSet::new();
        selection.select(pinned);
        let partition = selection.partition(&entries);

        assert_eq!(
            partition.selected().len() + partition.others().len(),
            entries.len()
        );
        for entry in partition.selected() {
            assert_eq!(entry.submitter(), pinned);
            assert!(!partition.others().contains(entry));
        }
        for entry in partition.others() {
            assert_eq!(entry.submitter(), other);
        }
    }

    #[test]
    fn test_partition_keeps_list_order_per_group() {
        let pinned = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let entries = entries_for(&[other, pinned, other, pinned]);

        let mut selection = SelectionSet::new();
        selection.select(pinned);
        let partition = selection.partition(&entries);

        let selected_links: Vec<&str> =
            partition.selected().iter().map(|e| e.link()).collect();
        let other_links: Vec<&str> = partition.others().iter().map(|e| e.link()).collect();

        assert_eq!(selected_links, vec!["gif-1", "gif-3"]);
        assert_eq!(other_links, vec!["gif-0", "gif-2"]);
    }

    #[test]
    fn test_empty_selection_leaves_all_in_others() {
        let entries = entries_for(&[Pubkey::new_unique(), Pubkey::new_unique()]);
        let selection = SelectionSet::new();

        let partition = selection.partition(&entries);

        assert!(partition.selected().is_empty());
        assert_eq!(partition.others().len(), 2);
    }
}
