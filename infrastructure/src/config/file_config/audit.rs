//! Audit log configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit configuration from TOML
///
/// When enabled without a path, the log goes next to the workspace file
/// as `<workspace>.audit.jsonl`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    pub enabled: bool,
    pub path: Option<PathBuf>,
    /// Rotate to `<file>.1` past this size (unset or 0: never)
    pub max_bytes: Option<u64>,
}

impl FileAuditConfig {
    /// Where to write the audit log, or `None` when auditing is off.
    pub fn resolve(&self, workspace: &std::path::Path) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        Some(
            self.path
                .clone()
                .unwrap_or_else(|| workspace.with_extension("audit.jsonl")),
        )
    }
}
