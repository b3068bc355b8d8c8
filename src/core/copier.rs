//! Mirrors selected files into the output root.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use super::error::CollectorError;
use super::CopiedFile;

/// Stages file copies under an output root, recreating each source path's
/// directory structure (`/logs/a.log` lands at `<out>/logs/a.log`).
///
/// This struct is stateless and provides methods as associated functions.
pub struct Copier;

impl Copier {
    /// Copies every path into `output_root` and reports per-file byte counts.
    ///
    /// Directory creation is idempotent; destination files are created or
    /// truncated. The first unreadable source, uncreatable destination, or
    /// failed transfer aborts the remaining paths. The copy is not
    /// transactional, and files staged before the failure stay on disk.
    /// Handles are closed on drop; close failures are not surfaced.
    pub fn copy(paths: &[PathBuf], output_root: &Path) -> Result<Vec<CopiedFile>, CollectorError> {
        let mut copied = Vec::with_capacity(paths.len());

        for path in paths {
            let dest = output_root.join(Self::mirror_path(path));
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| CollectorError::Io(e, parent.to_path_buf()))?;
            }

            let mut source =
                File::open(path).map_err(|e| CollectorError::Io(e, path.clone()))?;
            let mut target =
                File::create(&dest).map_err(|e| CollectorError::Io(e, dest.clone()))?;

            let bytes = io::copy(&mut source, &mut target)
                .map_err(|e| CollectorError::Io(e, dest.clone()))?;

            tracing::debug!("copied {} bytes to {}", bytes, dest.display());
            copied.push(CopiedFile { path: dest, bytes });
        }

        Ok(copied)
    }

    /// Strips root and prefix components so an absolute source path can be
    /// re-rooted under the output directory.
    fn mirror_path(path: &Path) -> PathBuf {
        path.components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect()
    }
}
