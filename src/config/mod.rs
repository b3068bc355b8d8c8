pub mod settings;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::CollectorError;

/// The configuration payload supplied by the host at construction and on
/// every reconfiguration.
///
/// Wire keys match the host's attribute names (`log_file_dirs`,
/// `output_directory`). Validation happens eagerly through [`Self::validate`]
/// before the engine accepts a payload; nothing is checked lazily at copy
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorConfig {
    /// Directories to search, in order. Must be non-empty.
    pub log_file_dirs: Vec<PathBuf>,
    /// Directory under which matched files are staged. Must already exist.
    pub output_directory: PathBuf,
}

impl CollectorConfig {
    /// Deserializes a loosely-typed host payload into a typed configuration.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CollectorError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Checks the configuration invariants.
    ///
    /// `log_file_dirs` must be non-empty and every entry must resolve to an
    /// existing, readable directory; `output_directory` must be non-empty and
    /// resolve to an existing directory. Any violation is a
    /// [`CollectorError::Config`]. Writability of the output directory is not
    /// probed here; a read-only output root first surfaces as an `Io` error
    /// when a copy is attempted.
    pub fn validate(&self) -> Result<(), CollectorError> {
        if self.log_file_dirs.is_empty() {
            return Err(CollectorError::Config(
                "at least one log file directory must be provided".to_string(),
            ));
        }
        for dir in &self.log_file_dirs {
            Self::require_directory(dir, "log file directory")?;
        }

        if self.output_directory.as_os_str().is_empty() {
            return Err(CollectorError::Config(
                "an output directory must be specified".to_string(),
            ));
        }
        Self::require_directory(&self.output_directory, "output directory")?;

        Ok(())
    }

    fn require_directory(path: &Path, what: &str) -> Result<(), CollectorError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(CollectorError::Config(format!(
                "{} is not a directory: {}",
                what,
                path.display()
            ))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CollectorError::Config(
                format!("{} does not exist: {}", what, path.display()),
            )),
            Err(e) => Err(CollectorError::Config(format!(
                "check {} permissions: {}: {}",
                what,
                path.display(),
                e
            ))),
        }
    }
}
