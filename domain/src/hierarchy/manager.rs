//! Hierarchy manager
//!
//! [`HierarchyManager`] is the entry point to the engine. Its operations
//! are implemented next to the concepts they belong to:
//!
//! | Operation | Module |
//! |-----------|--------|
//! | [`hierarchy_path`](HierarchyManager::hierarchy_path) | [`path`](super::path) |
//! | [`can_change_hierarchy`](HierarchyManager::can_change_hierarchy) | [`validation`](super::validation) |
//! | [`verify_hierarchy_links`](HierarchyManager::verify_hierarchy_links) | [`validation`](super::validation) |
//! | [`analyze_hierarchy`](HierarchyManager::analyze_hierarchy) | [`analytics`](super::analytics) |
//! | [`recommend`](HierarchyManager::recommend) | [`recommendation`](super::recommendation) |
//! | [`change_hierarchy`](HierarchyManager::change_hierarchy) | [`change`](super::change) |
//! | [`optimize_today_tasks`](HierarchyManager::optimize_today_tasks) | [`today`](crate::today) |
//!
//! Every operation is pure: inputs are borrowed, outputs freshly allocated.

use super::policy::HierarchyPolicy;
use crate::core::locale::Locale;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HierarchyManager {
    policy: HierarchyPolicy,
}

impl HierarchyManager {
    pub fn new(policy: HierarchyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &HierarchyPolicy {
        &self.policy
    }

    pub fn locale(&self) -> Locale {
        self.policy.locale
    }
}
