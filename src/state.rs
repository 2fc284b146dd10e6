//! Thread-safe wrappers for hosts that dispatch events on several threads
//!
//! [`LocalityIndex`] and [`AccessTracker`] assume a single owner. Hosts that
//! deliver show events on one thread and run sweeps on another wrap them
//! here instead, using `parking_lot` locks.
//!
//! # Thread Safety
//!
//! - `SharedLocalityIndex` uses `RwLock`: classification reads run
//!   concurrently, a rebuild is exclusive. The new prefix set is built
//!   outside the lock and swapped in, so a reader sees either the old or
//!   the new set, never a partial one.
//! - `SharedAccessTracker` uses `Mutex`: both recording and draining
//!   mutate, and a drain must not interleave with a show.
//! - Clones share the same underlying state.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::host::{DocumentResolver, DocumentShowListener};
use crate::locality::LocalityIndex;
use crate::tracker::{AccessTracker, DocumentId, DrainOutcome};

/// Locality index shareable across threads
#[derive(Debug, Clone, Default)]
pub struct SharedLocalityIndex {
    inner: Arc<RwLock<LocalityIndex>>,
}

impl SharedLocalityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing index
    pub fn from_index(index: LocalityIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Rebuild from `locations`; see [`LocalityIndex::rebuild`].
    pub fn rebuild<I, S>(&self, locations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fresh = LocalityIndex::from_locations(locations);
        *self.inner.write() = fresh;
    }

    pub fn is_local(&self, candidate: &str) -> bool {
        self.inner.read().is_local(candidate)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current index
    pub fn snapshot(&self) -> LocalityIndex {
        self.inner.read().clone()
    }
}

/// Access tracker shareable across threads
#[derive(Debug, Clone, Default)]
pub struct SharedAccessTracker {
    inner: Arc<Mutex<AccessTracker>>,
}

impl SharedAccessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_show(&self, id: DocumentId) -> u64 {
        self.inner.lock().record_show(id)
    }

    pub fn drain_least_recently_used(&self, n: usize) -> Vec<DocumentId> {
        self.inner.lock().drain_least_recently_used(n)
    }

    /// Drain under the lock, then resolve without holding it.
    pub fn drain_resolved<R>(&self, n: usize, resolver: &R) -> DrainOutcome
    where
        R: DocumentResolver + ?Sized,
    {
        let drained = self.drain_least_recently_used(n);
        DrainOutcome::resolve(drained, resolver)
    }

    pub fn forget(&self, id: DocumentId) -> bool {
        self.inner.lock().forget(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl DocumentShowListener for SharedAccessTracker {
    fn on_document_shown(&mut self, id: DocumentId) {
        self.record_show(id);
    }
}
