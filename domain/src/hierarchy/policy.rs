//! Hierarchy policy — tunables for scoring and the today view.
//!
//! [`HierarchyPolicy`] gathers the constants the engine reasons with. The
//! defaults reproduce the Workly app: an 8-hour workday as the time-weight
//! baseline, an 8-hour recommended daily limit, and a 2-hour threshold
//! before an independent task is suggested for promotion to a project.

use crate::core::locale::Locale;
use crate::today::value_objects::ReadyToStartMode;
use serde::{Deserialize, Serialize};

/// Minutes in the workday used as the time-weight baseline.
pub const DEFAULT_WORKDAY_MINUTES: u32 = 480;

/// Recommended total of planned minutes per day.
pub const DEFAULT_DAILY_LIMIT_MINUTES: u32 = 480;

/// Estimated minutes above which an independent task looks like a project.
pub const DEFAULT_PROMOTION_THRESHOLD_MINUTES: u32 = 120;

/// Upper bound on the time weight (a task counts at most as two workdays).
pub const MAX_TIME_WEIGHT: f64 = 2.0;

/// Independence above which a fully-linked task is suggested for simplification.
pub const SIMPLIFY_INDEPENDENCE_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyPolicy {
    /// Language of generated labels and messages.
    pub locale: Locale,
    /// Time-weight baseline in minutes. Zero is treated as one.
    pub workday_minutes: u32,
    /// Reported as `recommendedDailyLimit` by the today view.
    pub daily_limit_minutes: u32,
    pub promotion_threshold_minutes: u32,
    pub ready_to_start: ReadyToStartMode,
}

impl Default for HierarchyPolicy {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            workday_minutes: DEFAULT_WORKDAY_MINUTES,
            daily_limit_minutes: DEFAULT_DAILY_LIMIT_MINUTES,
            promotion_threshold_minutes: DEFAULT_PROMOTION_THRESHOLD_MINUTES,
            ready_to_start: ReadyToStartMode::default(),
        }
    }
}

impl HierarchyPolicy {
    // ==================== Builder Methods ====================

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_workday_minutes(mut self, minutes: u32) -> Self {
        self.workday_minutes = minutes;
        self
    }

    pub fn with_daily_limit_minutes(mut self, minutes: u32) -> Self {
        self.daily_limit_minutes = minutes;
        self
    }

    pub fn with_promotion_threshold_minutes(mut self, minutes: u32) -> Self {
        self.promotion_threshold_minutes = minutes;
        self
    }

    pub fn with_ready_to_start(mut self, mode: ReadyToStartMode) -> Self {
        self.ready_to_start = mode;
        self
    }

    /// Fraction of a workday the estimate represents, capped at [`MAX_TIME_WEIGHT`].
    pub fn time_weight(&self, estimated_minutes: f64) -> f64 {
        let baseline = f64::from(self.workday_minutes.max(1));
        (estimated_minutes / baseline).min(MAX_TIME_WEIGHT)
    }
}
