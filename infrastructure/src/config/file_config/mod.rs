//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod hierarchy;
mod output;
mod workspace;

pub use audit::FileAuditConfig;
pub use hierarchy::FileHierarchyConfig;
pub use output::FileOutputConfig;
pub use workspace::{DEFAULT_WORKSPACE_FILE, FileWorkspaceConfig};

use serde::{Deserialize, Serialize};
use workly_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Engine tunables
    pub hierarchy: FileHierarchyConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Workspace snapshot location
    pub workspace: FileWorkspaceConfig,
    /// Hierarchy change audit trail
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.hierarchy.to_policy().1
    }
}
