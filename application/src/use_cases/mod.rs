//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_task;
pub mod change_hierarchy;
pub mod plan_today;

#[cfg(test)]
pub(crate) mod test_support;
