use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::CollectorConfig;

/// Loads and validates a collector configuration from a JSON file.
///
/// This is the convenience path for hosts that keep the collector's
/// attributes in a config file rather than handing over an in-memory payload.
/// The file must parse into a [`CollectorConfig`] and pass validation; there
/// is no fallback to defaults, since a collector without search roots or an
/// output root cannot do anything useful.
pub fn load_config(path: &Path) -> Result<CollectorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;

    let config: CollectorConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config file at {}", path.display()))?;

    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}
