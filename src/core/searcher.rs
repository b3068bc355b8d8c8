//! Walks search roots and selects files by modification-time window and
//! service-name filter.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::CollectorError;
use super::Window;

/// The wildcard filter entry that matches every file.
pub const WILDCARD: &str = "*";

/// Recursive file selection over a set of search roots.
///
/// This struct is stateless and provides methods as associated functions.
pub struct Searcher;

impl Searcher {
    /// Collects every regular file under `roots` whose modification time lies
    /// strictly inside the window and whose base name matches the service
    /// filter.
    ///
    /// Roots are processed in list order; within a root, entries come back in
    /// directory-listing order. Both window boundaries are exclusive; a file
    /// modified exactly at `from` or `to` is not selected. A file whose name
    /// matches several filter entries is appended once per matching entry, so
    /// overlapping filters produce duplicate paths on purpose.
    ///
    /// The first traversal error (unreadable directory, broken entry) aborts
    /// the whole search; partial matches are discarded by the caller.
    pub fn search(
        roots: &[PathBuf],
        window: &Window,
        services: &[String],
    ) -> Result<Vec<PathBuf>, CollectorError> {
        let from = window.from_utc();
        let to = window.to_utc();
        let mut matches = Vec::new();

        for root in roots {
            for entry in WalkDir::new(root).follow_links(false) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let modified = entry.metadata()?.modified().map_err(|e| {
                    CollectorError::Io(e, entry.path().to_path_buf())
                })?;
                let modified = DateTime::<Utc>::from(modified);
                if modified <= from || modified >= to {
                    continue;
                }

                for service in services {
                    if Self::matches_service(entry.path(), service) {
                        matches.push(entry.path().to_path_buf());
                    }
                }
            }
        }

        tracing::debug!(
            "search matched {} file(s) across {} root(s)",
            matches.len(),
            roots.len()
        );
        Ok(matches)
    }

    /// Checks a path's base name against a single filter entry.
    ///
    /// The wildcard matches everything; anything else is a case-sensitive
    /// prefix match, no regex.
    fn matches_service(path: &Path, service: &str) -> bool {
        if service == WILDCARD {
            return true;
        }
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(service))
    }
}
