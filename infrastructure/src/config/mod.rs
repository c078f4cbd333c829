//! Configuration file loading for workly
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WORKLY_*` environment variables (`WORKLY_HIERARCHY__LOCALE=ko`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./workly.toml` or `./.workly.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/workly/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_WORKSPACE_FILE, FileAuditConfig, FileConfig, FileHierarchyConfig, FileOutputConfig,
    FileWorkspaceConfig,
};
pub use loader::ConfigLoader;
