//! Least-recently-used access tracking for open documents
//!
//! The host reports every document show through
//! [`AccessTracker::record_show`]. Each show takes the next value of a
//! monotonically increasing counter, so stamps are unique and ordering by
//! stamp is ordering by last access.
//!
//! Draining is destructive: an id handed out by
//! [`AccessTracker::drain_least_recently_used`] is forgotten, whether or not
//! the caller ends up closing that document. It comes back only after a new
//! show event.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::{DocumentResolver, DocumentShowListener};

/// Opaque host identifier of an open document.
///
/// Stable while the document stays open and not reused before it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

impl From<u64> for DocumentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Result of draining and resolving in one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrainOutcome {
    /// Drained ids the resolver still knows, oldest first
    pub resolved: Vec<(DocumentId, String)>,
    /// Drained ids the resolver no longer recognizes
    pub stale: Vec<DocumentId>,
}

impl DrainOutcome {
    /// Resolved paths, oldest first
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resolved.iter().map(|(_, path)| path.as_str())
    }

    /// Resolve already drained ids once each, keeping their order.
    pub fn resolve<R>(drained: Vec<DocumentId>, resolver: &R) -> Self
    where
        R: DocumentResolver + ?Sized,
    {
        let mut outcome = Self::default();
        for id in drained {
            match resolver.resolve(id) {
                Some(path) => outcome.resolved.push((id, path)),
                None => {
                    tracing::debug!("Drained {} no longer resolves to a document", id);
                    outcome.stale.push(id);
                }
            }
        }
        outcome
    }
}

/// Access-order record of shown documents
#[derive(Debug, Clone, Default)]
pub struct AccessTracker {
    stamps: HashMap<DocumentId, u64>,
    counter: u64,
}

impl AccessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a show event for `id` and return the stamp it received.
    ///
    /// Any earlier stamp for the same id is overwritten. Duplicate events
    /// are harmless; the counter still advances.
    pub fn record_show(&mut self, id: DocumentId) -> u64 {
        self.counter += 1;
        self.stamps.insert(id, self.counter);
        self.counter
    }

    /// Remove and return up to `n` ids, oldest access first.
    ///
    /// Asking for more than are tracked returns everything and leaves the
    /// tracker empty.
    pub fn drain_least_recently_used(&mut self, n: usize) -> Vec<DocumentId> {
        if n == 0 || self.stamps.is_empty() {
            return Vec::new();
        }

        let mut ordered: Vec<(u64, DocumentId)> =
            self.stamps.iter().map(|(id, stamp)| (*stamp, *id)).collect();
        // Stamps are unique, so an unstable sort is deterministic
        ordered.sort_unstable_by_key(|(stamp, _)| *stamp);

        let drained: Vec<DocumentId> = ordered.into_iter().take(n).map(|(_, id)| id).collect();
        for id in &drained {
            self.stamps.remove(id);
        }

        tracing::debug!(
            "Drained {} of {} requested LRU entries ({} still tracked)",
            drained.len(),
            n,
            self.stamps.len()
        );
        drained
    }

    /// Drain up to `n` ids and resolve each once through `resolver`.
    ///
    /// Ids the resolver no longer knows (the document was closed in the
    /// meantime) land in [`DrainOutcome::stale`]; they are still consumed.
    pub fn drain_resolved<R>(&mut self, n: usize, resolver: &R) -> DrainOutcome
    where
        R: DocumentResolver + ?Sized,
    {
        let drained = self.drain_least_recently_used(n);
        DrainOutcome::resolve(drained, resolver)
    }

    /// Stop tracking `id`. Returns whether it was tracked.
    pub fn forget(&mut self, id: DocumentId) -> bool {
        self.stamps.remove(&id).is_some()
    }

    /// Current stamp of `id`, if tracked
    pub fn stamp_of(&self, id: DocumentId) -> Option<u64> {
        self.stamps.get(&id).copied()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.stamps.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Last stamp handed out (0 before the first show)
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl DocumentShowListener for AccessTracker {
    fn on_document_shown(&mut self, id: DocumentId) {
        self.record_show(id);
    }
}
