//! A loadable, ordered in-memory collection slot.
//!
//! Every remote collection in the store lives in a [`CollectionSlot`]:
//! the loaded items, a loading flag, the last failure rendered as a
//! string, and a monotonically increasing fetch token. Tokens arbitrate
//! overlapping fetches: a completion carrying anything but the latest
//! issued token is discarded, so the newest fetch always wins no matter
//! in which order the responses arrive.

use raktadan_client::FetchError;
use raktadan_types::Record;
use tracing::debug;

/// Handle identifying one issued fetch. Only the latest token's
/// completion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// One collection's items plus its load state.
#[derive(Debug, Clone)]
pub struct CollectionSlot<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    latest_token: u64,
}

impl<T> Default for CollectionSlot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            latest_token: 0,
        }
    }
}

impl<T: Record> CollectionSlot<T> {
    /// The loaded items, in the collection's canonical order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last fetch failure, cleared by the next successful fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks a fetch as started and returns its token.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_token += 1;
        self.loading = true;
        FetchToken(self.latest_token)
    }

    /// Applies a fetch outcome.
    ///
    /// A stale token (a newer fetch has been issued since) is discarded
    /// without touching the slot. A failure empties the collection and
    /// records the rendered error; partial data is never kept.
    pub fn complete_fetch(&mut self, token: FetchToken, outcome: Result<Vec<T>, FetchError>) {
        if token.0 != self.latest_token {
            debug!(
                stale = token.0,
                latest = self.latest_token,
                "discarding stale fetch completion"
            );
            return;
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Inserts a record at its sorted position.
    pub fn insert(&mut self, record: T) {
        self.items.push(record);
        T::restore_order(&mut self.items);
    }

    /// Replaces the record with the same id, restoring order. Returns
    /// false when no record matches.
    pub fn replace(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                T::restore_order(&mut self.items);
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id. Returns false when no
    /// record matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
