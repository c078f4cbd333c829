//! Infrastructure layer for workly
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_WORKSPACE_FILE, FileAuditConfig, FileConfig, FileHierarchyConfig,
    FileOutputConfig, FileWorkspaceConfig,
};
pub use logging::JsonlAuditLogger;
pub use store::JsonWorkspaceStore;
