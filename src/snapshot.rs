//! In-memory host built from a JSON workspace snapshot
//!
//! Lets the sweep policies run without an editor: the CLI's `plan` command
//! and the integration tests both drive a [`SnapshotHost`].
//!
//! ```json
//! {
//!   "projects": ["C:\\Proj\\A\\A.csproj"],
//!   "documents": [
//!     {"id": 1, "path": "C:\\Proj\\A\\Program.cs"},
//!     {"id": 2, "path": "C:\\Temp\\notes.txt", "modified": true}
//!   ],
//!   "shows": [2, 1]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::host::{
    DocumentCloser, DocumentEnumerator, DocumentResolver, DocumentShowListener, OpenDocument,
    ProjectInventory,
};
use crate::tracker::DocumentId;
use crate::{Result, TabSweepError};

/// Recorded state of a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// Project files or directories loaded in the workspace
    #[serde(default)]
    pub projects: Vec<String>,
    /// Open documents
    #[serde(default)]
    pub documents: Vec<OpenDocument>,
    /// Document show events in the order they happened
    #[serde(default)]
    pub shows: Vec<DocumentId>,
}

impl WorkspaceSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TabSweepError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| TabSweepError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate snapshot JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(content).map_err(|e| TabSweepError::SnapshotError {
                message: e.to_string(),
            })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Document ids must be unique among open documents
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for document in &self.documents {
            if !seen.insert(document.id) {
                return Err(TabSweepError::SnapshotError {
                    message: format!("duplicate document id {}", document.id.0),
                });
            }
        }
        Ok(())
    }
}

/// Host backed by a [`WorkspaceSnapshot`]
#[derive(Debug, Clone, Default)]
pub struct SnapshotHost {
    snapshot: WorkspaceSnapshot,
    closed: Vec<(DocumentId, bool)>,
}

impl SnapshotHost {
    pub fn new(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            snapshot,
            closed: Vec::new(),
        }
    }

    /// Feed every recorded show event to `listener`, oldest first.
    pub fn replay_shows<L>(&self, listener: &mut L)
    where
        L: DocumentShowListener + ?Sized,
    {
        for id in &self.snapshot.shows {
            listener.on_document_shown(*id);
        }
    }

    /// Documents still open
    pub fn documents(&self) -> &[OpenDocument] {
        &self.snapshot.documents
    }

    /// Ids closed so far, with the force flag each close received
    pub fn closed(&self) -> &[(DocumentId, bool)] {
        &self.closed
    }

    pub fn snapshot(&self) -> &WorkspaceSnapshot {
        &self.snapshot
    }
}

impl ProjectInventory for SnapshotHost {
    fn project_locations(&self) -> Vec<String> {
        self.snapshot.projects.clone()
    }
}

impl DocumentEnumerator for SnapshotHost {
    fn open_documents(&self) -> Vec<OpenDocument> {
        self.snapshot.documents.clone()
    }
}

impl DocumentResolver for SnapshotHost {
    fn resolve(&self, id: DocumentId) -> Option<String> {
        self.snapshot
            .documents
            .iter()
            .find(|document| document.id == id)
            .map(|document| document.path.clone())
    }
}

impl DocumentCloser for SnapshotHost {
    fn close(&mut self, document: &OpenDocument, force: bool) -> Result<()> {
        let position = self
            .snapshot
            .documents
            .iter()
            .position(|open| open.id == document.id)
            .ok_or_else(|| TabSweepError::Host {
                message: format!("{} is not open", document.id),
            })?;

        let open = &self.snapshot.documents[position];
        if open.modified && !force {
            return Err(TabSweepError::Host {
                message: format!("{} has unsaved changes", open.path),
            });
        }

        self.snapshot.documents.remove(position);
        self.closed.push((document.id, force));
        Ok(())
    }
}
