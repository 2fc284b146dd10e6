//! Closing policies over a host's open documents
//!
//! A [`SweepSession`] is the per-workspace owner of one [`LocalityIndex`]
//! and one [`AccessTracker`]. It listens to show events and runs the two
//! policies:
//!
//! - **external**: rebuild the index from the project inventory, then close
//!   every open document whose path is not local
//! - **least recently used**: drain `lru.count` ids from the tracker,
//!   resolve them to paths, then close the open documents at those paths
//!
//! Either way a document with unsaved changes is only closed when
//! `close_modified` is set. Each policy comes in two forms: `plan_*`
//! decides without touching the host, `close_*` decides and then invokes
//! the host's close action.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::host::{
    DocumentCloser, DocumentEnumerator, DocumentResolver, DocumentShowListener, OpenDocument,
    ProjectInventory, SweepHost,
};
use crate::locality::LocalityIndex;
use crate::tracker::{AccessTracker, DocumentId, DrainOutcome};

/// Which closing policy produced a plan or report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepPolicy {
    External,
    Lru,
}

impl fmt::Display for SweepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepPolicy::External => write!(f, "external"),
            SweepPolicy::Lru => write!(f, "lru"),
        }
    }
}

/// Decisions of one policy, before anything is closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPlan {
    pub policy: SweepPolicy,
    /// Documents the policy selected and that may be closed
    pub to_close: Vec<OpenDocument>,
    /// Selected documents kept because they have unsaved changes
    pub skipped_modified: Vec<OpenDocument>,
    /// Drained ids that no longer resolve (LRU only)
    pub stale: Vec<DocumentId>,
}

impl SweepPlan {
    fn empty(policy: SweepPolicy) -> Self {
        Self {
            policy,
            to_close: Vec::new(),
            skipped_modified: Vec::new(),
            stale: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_close.is_empty() && self.skipped_modified.is_empty() && self.stale.is_empty()
    }
}

/// A document a sweep acted on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepEntry {
    pub id: DocumentId,
    pub path: String,
}

impl From<&OpenDocument> for SweepEntry {
    fn from(doc: &OpenDocument) -> Self {
        Self {
            id: doc.id,
            path: doc.path.clone(),
        }
    }
}

/// A close the host refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepFailure {
    pub id: DocumentId,
    pub path: String,
    pub message: String,
}

/// Outcome of executing a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub policy: SweepPolicy,
    pub closed: Vec<SweepEntry>,
    pub skipped_modified: Vec<SweepEntry>,
    pub failed: Vec<SweepFailure>,
    pub stale: Vec<DocumentId>,
}

impl SweepReport {
    /// Paths that were closed, in closing order
    pub fn closed_paths(&self) -> Vec<&str> {
        self.closed.iter().map(|entry| entry.path.as_str()).collect()
    }
}

/// Per-workspace sweep state
#[derive(Debug, Clone, Default)]
pub struct SweepSession {
    config: SweepConfig,
    index: LocalityIndex,
    tracker: AccessTracker,
}

impl SweepSession {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            index: LocalityIndex::new(),
            tracker: AccessTracker::new(),
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Swap settings. Turning LRU off discards the recorded access order.
    pub fn set_config(&mut self, config: SweepConfig) {
        if !config.lru.enabled && !self.tracker.is_empty() {
            tracing::debug!("LRU disabled, dropping {} tracked documents", self.tracker.len());
            self.tracker = AccessTracker::new();
        }
        self.config = config;
    }

    /// Index as of the last external plan
    pub fn index(&self) -> &LocalityIndex {
        &self.index
    }

    pub fn tracker(&self) -> &AccessTracker {
        &self.tracker
    }

    /// May this document be closed under the current settings?
    pub fn is_closable(&self, document: &OpenDocument) -> bool {
        !document.modified || self.config.close_modified
    }

    /// Select open documents outside every loaded project.
    ///
    /// Rebuilds the locality index from the inventory first. Documents
    /// without a path are never selected.
    pub fn plan_external<H>(&mut self, host: &H) -> SweepPlan
    where
        H: ProjectInventory + DocumentEnumerator + ?Sized,
    {
        self.index.rebuild(host.project_locations());

        let mut plan = SweepPlan::empty(SweepPolicy::External);
        for document in host.open_documents() {
            if document.path.is_empty() || self.index.is_local(&document.path) {
                continue;
            }
            self.assign(&mut plan, document);
        }

        tracing::debug!(
            "External plan: {} to close, {} kept for unsaved changes",
            plan.to_close.len(),
            plan.skipped_modified.len()
        );
        plan
    }

    /// Select the open documents behind the `lru.count` oldest tracked ids.
    ///
    /// Every open document at a drained path is selected. A drained
    /// document without a path selects only itself.
    ///
    /// Drains the tracker even though nothing is closed yet: drained ids
    /// are forgotten until shown again. Does nothing when LRU is disabled.
    pub fn plan_least_recently_used<H>(&mut self, host: &H) -> SweepPlan
    where
        H: DocumentEnumerator + DocumentResolver + ?Sized,
    {
        let mut plan = SweepPlan::empty(SweepPolicy::Lru);
        if !self.config.lru.enabled {
            tracing::debug!("LRU closing disabled, nothing to plan");
            return plan;
        }

        let DrainOutcome { resolved, stale } =
            self.tracker.drain_resolved(self.config.lru.count, host);
        plan.stale = stale;
        if resolved.is_empty() {
            return plan;
        }

        // Pathless buffers all share "", so those match by id only
        let mut wanted_paths: HashSet<&str> = HashSet::new();
        let mut wanted_ids: HashSet<DocumentId> = HashSet::new();
        for (id, path) in &resolved {
            if path.is_empty() {
                wanted_ids.insert(*id);
            } else {
                wanted_paths.insert(path.as_str());
            }
        }

        for document in host.open_documents() {
            let wanted = if document.path.is_empty() {
                wanted_ids.contains(&document.id)
            } else {
                wanted_paths.contains(document.path.as_str())
            };
            if wanted {
                self.assign(&mut plan, document);
            }
        }

        tracing::debug!(
            "LRU plan: {} to close, {} kept for unsaved changes, {} stale",
            plan.to_close.len(),
            plan.skipped_modified.len(),
            plan.stale.len()
        );
        plan
    }

    /// Plan and close external documents.
    pub fn close_external<H>(&mut self, host: &mut H) -> SweepReport
    where
        H: SweepHost + ?Sized,
    {
        let plan = self.plan_external(&*host);
        self.execute(plan, host)
    }

    /// Plan and close least recently used documents.
    pub fn close_least_recently_used<H>(&mut self, host: &mut H) -> SweepReport
    where
        H: SweepHost + ?Sized,
    {
        let plan = self.plan_least_recently_used(&*host);
        self.execute(plan, host)
    }

    /// Invoke the close action for every document in `plan`.
    ///
    /// A failed close is recorded and the sweep moves on.
    pub fn execute<C>(&self, plan: SweepPlan, closer: &mut C) -> SweepReport
    where
        C: DocumentCloser + ?Sized,
    {
        let force = self.config.close_modified;
        let mut report = SweepReport {
            policy: plan.policy,
            closed: Vec::with_capacity(plan.to_close.len()),
            skipped_modified: plan.skipped_modified.iter().map(SweepEntry::from).collect(),
            failed: Vec::new(),
            stale: plan.stale,
        };

        for document in &plan.to_close {
            match closer.close(document, force) {
                Ok(()) => {
                    tracing::info!("Closed {} ({}, {})", document.path, document.id, plan.policy);
                    report.closed.push(SweepEntry::from(document));
                }
                Err(e) => {
                    tracing::warn!("Failed to close {}: {}", document.path, e);
                    report.failed.push(SweepFailure {
                        id: document.id,
                        path: document.path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report
    }

    fn assign(&self, plan: &mut SweepPlan, document: OpenDocument) {
        if self.is_closable(&document) {
            plan.to_close.push(document);
        } else {
            plan.skipped_modified.push(document);
        }
    }
}

impl DocumentShowListener for SweepSession {
    fn on_document_shown(&mut self, id: DocumentId) {
        if self.config.lru.enabled {
            self.tracker.record_show(id);
        }
    }
}
