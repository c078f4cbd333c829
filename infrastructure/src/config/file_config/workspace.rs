//! Workspace configuration from TOML (`[workspace]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Snapshot file used when `--workspace` is not given.
pub const DEFAULT_WORKSPACE_FILE: &str = "workly.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkspaceConfig {
    /// Path to the workspace snapshot (JSON)
    pub path: Option<PathBuf>,
}

impl FileWorkspaceConfig {
    /// Resolve the snapshot path: explicit override, then config, then `./workly.json`.
    pub fn resolve(&self, explicit: Option<&PathBuf>) -> PathBuf {
        explicit
            .or(self.path.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKSPACE_FILE))
    }
}
