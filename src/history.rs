//! Bounded record of recently generated identifiers.

use std::collections::VecDeque;

use crate::{IdKind, Identifier};

/// The number of entries a [`History`] keeps by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// One remembered identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// The rendered identifier.
    pub value: String,

    /// The kind it was generated as.
    pub kind: IdKind,

    /// When it was recorded, as a Unix timestamp in milliseconds.
    pub unix_ts_ms: u64,
}

/// Most-recent-first list of generated identifiers that drops the oldest entries beyond its
/// capacity.
///
/// # Examples
///
/// ```rust
/// use idkit::{History, IdKind, IdentifierRequest};
///
/// let mut history = History::with_capacity(2);
/// for kind in [IdKind::Nil, IdKind::Max, IdKind::V4] {
///     history.record(&idkit::generate(&IdentifierRequest::default_for(kind))?, 0);
/// }
/// let kinds: Vec<IdKind> = history.iter().map(|e| e.kind).collect();
/// assert_eq!(kinds, [IdKind::V4, IdKind::Max]);
/// # Ok::<(), idkit::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Creates an empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty history holding up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Puts `identifier` at the front, evicting the oldest entry if the history is full.
    pub fn record(&mut self, identifier: &Identifier, unix_ts_ms: u64) {
        if self.capacity == 0 {
            return;
        }
        self.entries.truncate(self.capacity - 1);
        self.entries.push_front(HistoryEntry {
            value: identifier.to_string(),
            kind: identifier.kind(),
            unix_ts_ms,
        });
    }

    /// Records each identifier of a batch in order, so the last one ends up at the front.
    pub fn record_all<'a>(
        &mut self,
        identifiers: impl IntoIterator<Item = &'a Identifier>,
        unix_ts_ms: u64,
    ) {
        for e in identifiers {
            self.record(e, unix_ts_ms);
        }
    }

    /// Returns an iterator over the entries, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
