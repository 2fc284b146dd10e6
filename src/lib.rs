//! tabsweep-engine: editor tab housekeeping
//!
//! Decides which open documents in an editor workspace are eligible for
//! automatic closing, using two independent policies:
//!
//! - **external** documents, not under any project loaded in the workspace
//!   ([`LocalityIndex`])
//! - **least recently used** documents, ranked by the order in which they
//!   were last shown ([`AccessTracker`])
//!
//! The engine never talks to an editor directly. Hosts implement the traits
//! in [`host`] and drive a [`SweepSession`], one per workspace session.
//!
//! # Example
//!
//! ```
//! use tabsweep_engine::{AccessTracker, DocumentId, LocalityIndex};
//!
//! let index = LocalityIndex::from_locations([r"c:\proj\a", r"c:\proj\b"]);
//! assert!(index.is_local(r"c:\proj\a\file.cs"));
//! assert!(!index.is_local(r"c:\other\file.cs"));
//!
//! let mut tracker = AccessTracker::new();
//! tracker.record_show(DocumentId(1));
//! tracker.record_show(DocumentId(2));
//! tracker.record_show(DocumentId(1));
//! assert_eq!(
//!     tracker.drain_least_recently_used(2),
//!     vec![DocumentId(2), DocumentId(1)]
//! );
//! assert!(tracker.is_empty());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod host;
pub mod locality;
pub mod paths;
pub mod snapshot;
pub mod state;
pub mod sweep;
pub mod tracker;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::SweepConfig;
pub use error::{Result, TabSweepError};
pub use host::{
    DocumentCloser, DocumentEnumerator, DocumentResolver, DocumentShowListener, OpenDocument,
    ProjectInventory, SweepHost,
};
pub use locality::LocalityIndex;
pub use snapshot::{SnapshotHost, WorkspaceSnapshot};
pub use state::{SharedAccessTracker, SharedLocalityIndex};
pub use sweep::{SweepPlan, SweepPolicy, SweepReport, SweepSession};
pub use tracker::{AccessTracker, DocumentId, DrainOutcome};
