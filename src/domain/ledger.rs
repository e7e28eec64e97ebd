use super::Entry;

/// Append-only, insertion-ordered collection of admitted entries.
///
/// There is no way to remove or edit an entry once appended. Duplicates are
/// legal: two identical grocery purchases are two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a ledger from previously admitted entries, keeping their order.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
