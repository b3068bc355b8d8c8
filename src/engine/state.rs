//! The record of the most recently completed search-and-copy run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::Window;

/// Sentinel message returned while no run has completed since the last
/// (re)configuration.
pub const NO_RUNS_MSG: &str = "no searches have been run";

/// The single mutable record of the last completed run.
///
/// Owned exclusively by the engine and replaced wholesale on every successful
/// execute; cleared on reconfiguration. Readers never see this directly,
/// they get an owned [`LastRunReading`] snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
    /// The resolved window the run searched.
    pub window: Window,
    /// The service filter actually applied.
    pub services: Vec<String>,
    /// Destination paths staged under the output root, in copy order.
    pub files_collected: Vec<PathBuf>,
}

impl RunState {
    /// Produces the reader-facing snapshot payload.
    pub fn snapshot(&self) -> LastRunReading {
        LastRunReading::Completed(RunSnapshot {
            completed_at: self.completed_at,
            files_copied: self.files_collected.clone(),
            date_from: self.window.from.to_rfc3339(),
            date_to: self.window.to.to_rfc3339(),
            services: self.services.clone(),
        })
    }
}

/// An immutable copy of the last run, or an explicit "nothing yet" sentinel.
///
/// Serializes either as the populated snapshot object or as
/// `{"msg": "no searches have been run"}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum LastRunReading {
    Completed(RunSnapshot),
    NoRuns { msg: String },
}

impl LastRunReading {
    /// The sentinel reading returned before the first completed run.
    pub fn no_runs() -> Self {
        Self::NoRuns {
            msg: NO_RUNS_MSG.to_string(),
        }
    }
}

/// The populated form of a last-run reading.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub completed_at: DateTime<Utc>,
    pub files_copied: Vec<PathBuf>,
    pub date_from: String,
    pub date_to: String,
    pub services: Vec<String>,
}
