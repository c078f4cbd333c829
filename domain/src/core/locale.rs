//! User-facing message catalog.
//!
//! Every label, placeholder, validation message and recommendation the
//! engine produces is looked up through [`Locale`]. English is the default;
//! Korean mirrors the labels the Workly app ships with.

use serde::{Deserialize, Serialize};

/// Language used for engine-generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    // ==================== Path labels ====================

    pub fn independent_label(&self) -> &'static str {
        match self {
            Locale::En => "Independent task",
            Locale::Ko => "독립 작업",
        }
    }

    pub fn unresolved_project(&self) -> &'static str {
        match self {
            Locale::En => "Unresolved project",
            Locale::Ko => "프로젝트 미확인",
        }
    }

    pub fn unresolved_goal(&self) -> &'static str {
        match self {
            Locale::En => "Unresolved goal",
            Locale::Ko => "목표 미확인",
        }
    }

    pub fn unclassified_label(&self) -> &'static str {
        match self {
            Locale::En => "Unclassified task",
            Locale::Ko => "분류 미확인",
        }
    }

    // ==================== Change validation ====================

    pub fn completed_is_immutable(&self) -> &'static str {
        match self {
            Locale::En => "The hierarchy of a completed task cannot be changed",
            Locale::Ko => "완료된 작업의 계층은 변경할 수 없습니다",
        }
    }

    pub fn executing_caution(&self) -> &'static str {
        match self {
            Locale::En => {
                "This task is being executed; changing its hierarchy may disturb progress tracking"
            }
            Locale::Ko => "실행 중인 작업입니다. 계층을 변경하면 진행 상황 추적에 영향을 줄 수 있습니다",
        }
    }

    pub fn focused_to_independent(&self) -> &'static str {
        match self {
            Locale::En => {
                "This is the focused task; making it independent detaches it from tracked project progress"
            }
            Locale::Ko => "포커스된 작업을 독립 작업으로 바꾸면 프로젝트 진행률 추적에서 빠집니다",
        }
    }

    pub fn structuring_suggestion(&self) -> &'static str {
        match self {
            Locale::En => "Placing the task in a project or goal makes its progress traceable",
            Locale::Ko => "작업을 프로젝트나 목표에 연결하면 목표까지의 진행 상황을 추적할 수 있습니다",
        }
    }

    // ==================== Link verification ====================

    pub fn missing_project_link(&self) -> &'static str {
        match self {
            Locale::En => "This hierarchy type requires a project",
            Locale::Ko => "이 계층 유형에는 프로젝트가 필요합니다",
        }
    }

    pub fn missing_goal_link(&self) -> &'static str {
        match self {
            Locale::En => "This hierarchy type requires a goal",
            Locale::Ko => "이 계층 유형에는 목표가 필요합니다",
        }
    }

    pub fn unexpected_project_link(&self) -> &'static str {
        match self {
            Locale::En => "This hierarchy type does not take a project; it will be cleared",
            Locale::Ko => "이 계층 유형은 프로젝트를 갖지 않습니다. 프로젝트 연결이 해제됩니다",
        }
    }

    pub fn unexpected_goal_link(&self) -> &'static str {
        match self {
            Locale::En => "This hierarchy type does not take a goal; it will be cleared",
            Locale::Ko => "이 계층 유형은 목표를 갖지 않습니다. 목표 연결이 해제됩니다",
        }
    }

    pub fn unclassified_target(&self) -> &'static str {
        match self {
            Locale::En => "A task cannot be moved to an unclassified hierarchy",
            Locale::Ko => "분류되지 않은 계층으로는 이동할 수 없습니다",
        }
    }

    pub fn unknown_project(&self, project_id: &str) -> String {
        match self {
            Locale::En => format!("Project {} was not found", project_id),
            Locale::Ko => format!("프로젝트 {}을(를) 찾을 수 없습니다", project_id),
        }
    }

    pub fn unknown_goal(&self, goal_id: &str) -> String {
        match self {
            Locale::En => format!("Goal {} was not found", goal_id),
            Locale::Ko => format!("목표 {}을(를) 찾을 수 없습니다", goal_id),
        }
    }

    pub fn project_goal_mismatch(&self, project: &str, goal: &str) -> String {
        match self {
            Locale::En => format!("Project \"{}\" does not belong to goal \"{}\"", project, goal),
            Locale::Ko => format!("프로젝트 \"{}\"은(는) 목표 \"{}\"에 속하지 않습니다", project, goal),
        }
    }

    // ==================== Recommendations ====================

    pub fn move_to_project(&self) -> &'static str {
        match self {
            Locale::En => "This is a large task; consider promoting it to a project",
            Locale::Ko => "큰 작업입니다. 프로젝트로 승격하는 것을 고려해보세요",
        }
    }

    pub fn connect_to_goal(&self) -> &'static str {
        match self {
            Locale::En => "High-priority project task; consider connecting its project to a goal",
            Locale::Ko => "우선순위가 높은 작업입니다. 목표와 연결해보세요",
        }
    }

    pub fn become_independent(&self) -> &'static str {
        match self {
            Locale::En => "This task is largely self-contained; consider making it independent",
            Locale::Ko => "독립적인 작업입니다. 독립 작업으로 단순화하는 것을 고려해보세요",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ko" | "korean" => Ok(Locale::Ko),
            _ => Err(format!("Unknown locale: {}. Valid: en, ko", s)),
        }
    }
}
