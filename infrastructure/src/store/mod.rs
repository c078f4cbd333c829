//! Task store adapters.
//!
//! Provides [`JsonWorkspaceStore`], a local snapshot file that implements
//! the [`TaskStore`](workly_application::TaskStore) port.

mod json_store;

pub use json_store::JsonWorkspaceStore;
