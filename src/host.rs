//! Contracts between the sweep engine and the editor host
//!
//! The engine never talks to an editor directly. Whatever embeds it (an IDE
//! extension, a test, the snapshot-driven CLI) implements these traits:
//!
//! - [`ProjectInventory`] - locations of the projects currently loaded
//! - [`DocumentEnumerator`] - the open documents
//! - [`DocumentResolver`] - id to current full path
//! - [`DocumentCloser`] - the close action
//! - [`DocumentShowListener`] - the one host notification the engine needs

use serde::{Deserialize, Serialize};

use crate::tracker::DocumentId;
use crate::Result;

/// An open document as the host reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDocument {
    pub id: DocumentId,
    /// Full path of the document; may be empty for unsaved buffers
    pub path: String,
    /// Has unsaved changes
    #[serde(default)]
    pub modified: bool,
}

impl OpenDocument {
    pub fn new(id: impl Into<DocumentId>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            modified: false,
        }
    }

    /// Mark as having unsaved changes
    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

/// Source of project locations for the locality index.
///
/// Locations are raw strings: project files or project directories, in any
/// order. Unloaded projects should be left out.
pub trait ProjectInventory {
    fn project_locations(&self) -> Vec<String>;
}

/// Enumerates the documents currently open in the host
pub trait DocumentEnumerator {
    fn open_documents(&self) -> Vec<OpenDocument>;
}

/// Maps a document id back to its current full path.
///
/// Returns `None` for ids the host no longer knows.
pub trait DocumentResolver {
    fn resolve(&self, id: DocumentId) -> Option<String>;
}

/// Closes documents on behalf of a sweep.
///
/// `force` asks the host to close even when the document has unsaved
/// changes.
pub trait DocumentCloser {
    fn close(&mut self, document: &OpenDocument, force: bool) -> Result<()>;
}

/// Observer for document show events.
///
/// Hosts call this every time a document window is shown. Other host
/// notifications (save, lock, hide) carry nothing the engine uses.
pub trait DocumentShowListener {
    fn on_document_shown(&mut self, id: DocumentId);
}

/// Everything a full sweep needs from the host
pub trait SweepHost: ProjectInventory + DocumentEnumerator + DocumentResolver + DocumentCloser {}

impl<T> SweepHost for T where
    T: ProjectInventory + DocumentEnumerator + DocumentResolver + DocumentCloser
{
}

impl<F> DocumentResolver for F
where
    F: Fn(DocumentId) -> Option<String>,
{
    fn resolve(&self, id: DocumentId) -> Option<String> {
        self(id)
    }
}
