pub mod analyze;
pub mod calculate;
pub mod completions;
pub mod config;
pub mod init;
pub mod suite;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read and deserialize a JSON document supplied on the command line.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}
