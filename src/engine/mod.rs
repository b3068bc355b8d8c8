//! The engine that owns configuration and run state, and orchestrates the
//! search-and-collect operation.

pub mod state;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use crate::config::CollectorConfig;
use crate::core::searcher::WILDCARD;
use crate::core::{CollectorError, Copier, Searcher, TimeWindowBuilder, Window};

pub use state::{LastRunReading, RunSnapshot, RunState};

/// The query payload for a single search-and-collect invocation.
///
/// `from` and `to` are local wall-clock strings (`YYYY-MM-DDTHH:MM`, no zone
/// suffix); `services` is either the wildcard `*` or a comma-separated list
/// of service-name prefixes, and defaults to the wildcard when absent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Query {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub services: Option<String>,
}

impl Query {
    /// Deserializes a loosely-typed host payload into a typed query.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CollectorError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Normalizes the services string into the filter list to apply.
    ///
    /// Entries are comma-split and trimmed; blank entries are dropped. An
    /// absent or blank services string falls back to the wildcard.
    pub fn service_filters(&self) -> Vec<String> {
        let filters: Vec<String> = self
            .services
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if filters.is_empty() {
            vec![WILDCARD.to_string()]
        } else {
            filters
        }
    }
}

/// The result payload returned by a successful execute.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Destination paths staged under the output root, in copy order.
    pub files_copied: Vec<PathBuf>,
    /// The resolved lower boundary, rendered with its offset.
    pub date_from: String,
    /// The resolved upper boundary, rendered with its offset.
    pub date_to: String,
    /// The filter list actually applied.
    pub services: Vec<String>,
    /// Elapsed wall-clock duration of the whole operation.
    pub runtime: String,
}

/// The validated configuration the engine runs with.
#[derive(Debug, Clone)]
struct EngineConfig {
    search_roots: Vec<PathBuf>,
    output_root: PathBuf,
    utc_offset_seconds: i32,
}

/// Everything the engine mutates, guarded by a single lock.
#[derive(Debug, Default)]
struct EngineInner {
    config: Option<EngineConfig>,
    last_run: Option<RunState>,
}

/// The search-and-collect orchestrator.
///
/// All three operations ([`reconfigure`](Self::reconfigure),
/// [`execute`](Self::execute), [`last_run`](Self::last_run)) serialize
/// behind one mutex. The mutating operations hold the lock for their entire
/// duration, filesystem I/O included: one long-running search blocks every
/// other caller until it finishes. That is a deliberate trade-off for a
/// low-frequency diagnostic tool and must not be loosened into a
/// finer-grained scheme.
#[derive(Debug, Default)]
pub struct Engine {
    inner: Mutex<EngineInner>,
}

impl Engine {
    /// Creates an unconfigured engine. Every operation except
    /// [`reconfigure`](Self::reconfigure) fails until a configuration is
    /// applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine and applies an initial configuration, the way a host
    /// constructs the component.
    pub fn with_config(config: CollectorConfig) -> Result<Self, CollectorError> {
        let engine = Self::new();
        engine.reconfigure(config)?;
        Ok(engine)
    }

    /// Validates and applies a configuration.
    ///
    /// On success the previous configuration is replaced wholesale, the last
    /// run is cleared, and the host's UTC offset is re-captured from the
    /// local time zone. On failure the engine keeps whatever configuration
    /// and run state it had, including none at all.
    pub fn reconfigure(&self, config: CollectorConfig) -> Result<(), CollectorError> {
        let mut inner = self
            .inner
            .lock()
            .expect("engine mutex poisoned. This should not happen.");

        config.validate()?;

        let utc_offset_seconds = Local::now().offset().local_minus_utc();
        inner.config = Some(EngineConfig {
            search_roots: config.log_file_dirs,
            output_root: config.output_directory,
            utc_offset_seconds,
        });
        inner.last_run = None;

        tracing::info!(
            "configuration applied, utc offset {}s; run state cleared",
            utc_offset_seconds
        );
        Ok(())
    }

    /// Runs one synchronous search-and-collect operation.
    ///
    /// Builds both window boundaries, searches the configured roots, stages
    /// copies under the output root, then replaces the run state and returns
    /// the result payload. Any failure aborts the call, surfaces the
    /// originating error, and leaves the previous run state untouched. A
    /// failed copy may still leave partial output on disk, which is never
    /// rolled back.
    pub fn execute(&self, query: &Query) -> Result<RunResult, CollectorError> {
        let mut inner = self
            .inner
            .lock()
            .expect("engine mutex poisoned. This should not happen.");
        let config = inner.config.as_ref().ok_or(CollectorError::NotConfigured)?;

        let started = Instant::now();
        let window = Window {
            from: TimeWindowBuilder::build(&query.from, config.utc_offset_seconds)?,
            to: TimeWindowBuilder::build(&query.to, config.utc_offset_seconds)?,
        };
        let services = query.service_filters();

        tracing::debug!(
            "executing search from {} to {} for services {:?}",
            window.from,
            window.to,
            services
        );

        let found = Searcher::search(&config.search_roots, &window, &services)?;
        let copied = Copier::copy(&found, &config.output_root)?;
        let files_copied: Vec<PathBuf> = copied.into_iter().map(|c| c.path).collect();

        let result = RunResult {
            files_copied: files_copied.clone(),
            date_from: window.from.to_rfc3339(),
            date_to: window.to.to_rfc3339(),
            services: services.clone(),
            runtime: format!("{:?}", started.elapsed()),
        };

        inner.last_run = Some(RunState {
            completed_at: Utc::now(),
            window,
            services,
            files_collected: files_copied,
        });

        Ok(result)
    }

    /// Returns an owned snapshot of the last completed run, or the sentinel
    /// reading if none has completed since the last (re)configuration.
    pub fn last_run(&self) -> LastRunReading {
        let inner = self
            .inner
            .lock()
            .expect("engine mutex poisoned. This should not happen.");
        match &inner.last_run {
            Some(run) => run.snapshot(),
            None => LastRunReading::no_runs(),
        }
    }
}
