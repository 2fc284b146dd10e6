//! Locality classification against the projects loaded in a workspace
//!
//! A [`LocalityIndex`] holds the lower-cased base directories of every
//! loaded project. A document is *local* when one of those directories
//! occurs anywhere inside its lower-cased path, and *external* otherwise.
//!
//! # Matching is substring containment
//!
//! `is_local` does not check that a prefix is a path ancestor of the
//! candidate. With a project at `c:\proj\a`, the path `c:\proj\ab\x.cs` is
//! classified local as well. Callers depend on this behavior; tightening it
//! to a component-wise ancestor test changes which documents get closed.
//!
//! # Example
//!
//! ```
//! use tabsweep_engine::LocalityIndex;
//!
//! let mut index = LocalityIndex::new();
//! index.rebuild([r"C:\Proj\A\A.csproj", r"C:\Proj\B\"]);
//!
//! assert!(index.is_local(r"c:\proj\a\program.cs"));
//! assert!(!index.is_local(r"c:\temp\scratch.txt"));
//! ```

use std::collections::HashSet;

use crate::paths;

/// Set of directory keys considered local to the current workspace
#[derive(Debug, Clone, Default)]
pub struct LocalityIndex {
    prefixes: HashSet<String>,
}

impl LocalityIndex {
    /// Create an empty index. Everything is external until the first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index straight from project locations.
    pub fn from_locations<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        index.rebuild(locations);
        index
    }

    /// Replace the prefix set with one derived from `locations`.
    ///
    /// Each location is lower-cased; project files contribute their parent
    /// directory. Empty or malformed locations are skipped, so a rebuild
    /// never fails and never stores an empty prefix.
    pub fn rebuild<I, S>(&mut self, locations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes = HashSet::new();
        let mut skipped = 0usize;

        for location in locations {
            let raw = location.as_ref();
            match paths::project_base_dir(raw) {
                Some(dir) => {
                    prefixes.insert(dir);
                }
                None => {
                    skipped += 1;
                    tracing::trace!("Skipping unusable project location {:?}", raw);
                }
            }
        }

        tracing::debug!(
            "Rebuilt locality index: {} prefixes ({} locations skipped)",
            prefixes.len(),
            skipped
        );
        self.prefixes = prefixes;
    }

    /// True iff some stored prefix occurs in the lower-cased `candidate`.
    ///
    /// The candidate is normalized like a location (`\\?\` stripped). An
    /// empty candidate or an empty index is never local.
    pub fn is_local(&self, candidate: &str) -> bool {
        if candidate.is_empty() || self.prefixes.is_empty() {
            return false;
        }
        let key = paths::normalize_key(&paths::strip_verbatim_prefix(candidate));
        self.prefixes.iter().any(|prefix| key.contains(prefix.as_str()))
    }

    /// Inverse of [`is_local`](Self::is_local).
    pub fn is_external(&self, candidate: &str) -> bool {
        !self.is_local(candidate)
    }

    /// Number of distinct prefixes
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Check whether an already-normalized directory key is stored
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Stored prefixes in unspecified order
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}
