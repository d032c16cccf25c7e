//! Read-only snapshot of the writing-projects directory.
//!
//! Each project is a subdirectory of the projects root, expected to
//! contain a `<name>.sqlite` database once initialized. The launcher
//! only counts projects for status reporting; it never writes anything
//! beyond creating the (empty) root directory when it is missing.

use crate::error::{Error, Result};
use std::path::Path;

/// One project subdirectory, paired with its database presence flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Directory name of the project.
    pub name: String,
    /// Whether `<name>.sqlite` (or the legacy `<name>.db`) exists
    /// inside the project directory.
    pub has_database: bool,
}

/// Snapshot of the projects root, recomputed on every scan.
#[derive(Debug, Clone, Default)]
pub struct ProjectListing {
    entries: Vec<ProjectEntry>,
}

impl ProjectListing {
    /// Scans `root` for project subdirectories.
    ///
    /// Creates the root directory if it is absent (empty creation only).
    /// Files directly under the root are ignored; only subdirectories
    /// count as projects.
    pub fn scan(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root).map_err(|e| {
            Error::Other(format!(
                "failed to create projects directory {}: {}",
                root.display(),
                e
            ))
        })?;

        let read_dir = std::fs::read_dir(root).map_err(|e| {
            Error::Other(format!(
                "failed to read projects directory {}: {}",
                root.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| Error::Other(format!("failed to read directory entry: {}", e)))?;

            // Entries can vanish between readdir and stat; skip quietly.
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            // Older projects carry `<name>.db` instead of `<name>.sqlite`.
            let has_database = path.join(format!("{}.sqlite", name)).is_file()
                || path.join(format!("{}.db", name)).is_file();
            entries.push(ProjectEntry { name, has_database });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { entries })
    }

    /// Number of projects in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no projects.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of projects whose database file is present.
    pub fn with_database(&self) -> usize {
        self.entries.iter().filter(|e| e.has_database).count()
    }

    /// The scanned entries, sorted by name.
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }
}
