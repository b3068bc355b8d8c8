pub mod copier;
pub mod error;
pub mod searcher;
pub mod time_window;

use chrono::{DateTime, FixedOffset, Utc};
use std::path::PathBuf;

/// The resolved `(from, to)` instant pair a query runs against.
///
/// Both boundaries carry the UTC offset they were parsed with so they can be
/// rendered back to the caller unchanged; comparisons against file
/// modification times are done on the instant, not the wall-clock rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

impl Window {
    /// The lower boundary as a UTC instant.
    pub fn from_utc(&self) -> DateTime<Utc> {
        self.from.with_timezone(&Utc)
    }

    /// The upper boundary as a UTC instant.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.to.with_timezone(&Utc)
    }
}

/// A single file staged under the output root, with the byte count that was
/// transferred for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

pub use copier::Copier;
pub use error::CollectorError;
pub use searcher::Searcher;
pub use time_window::TimeWindowBuilder;
