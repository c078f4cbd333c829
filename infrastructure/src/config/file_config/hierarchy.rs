//! Hierarchy engine configuration from TOML (`[hierarchy]` section)

use serde::{Deserialize, Serialize};
use workly_domain::hierarchy::policy::{
    DEFAULT_DAILY_LIMIT_MINUTES, DEFAULT_PROMOTION_THRESHOLD_MINUTES, DEFAULT_WORKDAY_MINUTES,
};
use workly_domain::{
    ConfigIssue, ConfigIssueCode, HierarchyPolicy, Locale, ReadyToStartMode, Severity,
};

/// Raw hierarchy configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHierarchyConfig {
    /// Label language ("en", "ko")
    pub locale: String,
    /// Time-weight baseline in minutes
    pub workday_minutes: u32,
    /// Recommended daily limit reported by the today view
    pub daily_limit_minutes: u32,
    /// Estimate above which an independent task is suggested for a project
    pub promotion_threshold_minutes: u32,
    /// "overlapping" or "exclusive"
    pub ready_to_start: String,
    /// Check change targets against known projects and goals
    pub verify_links: bool,
}

impl Default for FileHierarchyConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().as_str().to_string(),
            workday_minutes: DEFAULT_WORKDAY_MINUTES,
            daily_limit_minutes: DEFAULT_DAILY_LIMIT_MINUTES,
            promotion_threshold_minutes: DEFAULT_PROMOTION_THRESHOLD_MINUTES,
            ready_to_start: ReadyToStartMode::default().as_str().to_string(),
            verify_links: true,
        }
    }
}

impl FileHierarchyConfig {
    /// Parse locale string into Locale
    ///
    /// Accepts: "en", "english", "ko", "korean"
    pub fn parse_locale(&self) -> (Locale, Vec<ConfigIssue>) {
        match self.locale.parse::<Locale>() {
            Ok(locale) => (locale, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "hierarchy.locale".to_string(),
                        value: self.locale.clone(),
                        valid_values: vec!["en".to_string(), "ko".to_string()],
                    },
                    message: format!(
                        "hierarchy.locale: unknown value '{}', falling back to 'en'",
                        self.locale
                    ),
                };
                (Locale::default(), vec![issue])
            }
        }
    }

    /// Parse ready_to_start string into ReadyToStartMode
    pub fn parse_ready_to_start(&self) -> (ReadyToStartMode, Vec<ConfigIssue>) {
        match self.ready_to_start.parse::<ReadyToStartMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "hierarchy.ready_to_start".to_string(),
                        value: self.ready_to_start.clone(),
                        valid_values: vec!["overlapping".to_string(), "exclusive".to_string()],
                    },
                    message: format!(
                        "hierarchy.ready_to_start: unknown value '{}', falling back to 'overlapping'",
                        self.ready_to_start
                    ),
                };
                (ReadyToStartMode::default(), vec![issue])
            }
        }
    }

    /// Build the engine policy, collecting every issue found on the way.
    pub fn to_policy(&self) -> (HierarchyPolicy, Vec<ConfigIssue>) {
        let (locale, mut issues) = self.parse_locale();
        let (ready_to_start, mode_issues) = self.parse_ready_to_start();
        issues.extend(mode_issues);

        if self.workday_minutes == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "hierarchy.workday_minutes".to_string(),
                },
                message: "hierarchy.workday_minutes must be greater than 0".to_string(),
            });
        }

        if self.daily_limit_minutes == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "hierarchy.daily_limit_minutes".to_string(),
                },
                message: "hierarchy.daily_limit_minutes is 0; every planned day is over capacity"
                    .to_string(),
            });
        }

        let policy = HierarchyPolicy::default()
            .with_locale(locale)
            .with_workday_minutes(self.workday_minutes)
            .with_daily_limit_minutes(self.daily_limit_minutes)
            .with_promotion_threshold_minutes(self.promotion_threshold_minutes)
            .with_ready_to_start(ready_to_start);

        (policy, issues)
    }
}
