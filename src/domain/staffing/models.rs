use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Available,
    Deployed,
    Inactive,
    #[default]
    Unknown,
}

impl MemberStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "available" => Self::Available,
            "deployed" => Self::Deployed,
            "inactive" => Self::Inactive,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Deployed => "deployed",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }
}

/// A team member as the directory reports it. Records embedded in a project
/// are usually partial, so everything but the name is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Member {
    pub id: Option<i64>,
    pub name: String,
    pub ve_code: Option<String>,
    pub role: String,
    pub status: MemberStatus,
    pub performance_score: Option<f64>,
    pub rotation_rank: Option<i64>,
    pub assigned_projects: Vec<String>,
    pub current_project: Option<String>,
    pub assigned_projects_count: u32,
}

impl Member {
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn is_assigned_to(&self, project_key: &str) -> bool {
        self.assigned_projects.iter().any(|p| p == project_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ProjectStatus {
    Active,
    Upcoming,
    Completed,
    OnHold,
    Planning,
    Other(String),
}

impl ProjectStatus {
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        match lowered.as_str() {
            "active" => Self::Active,
            "upcoming" => Self::Upcoming,
            "completed" => Self::Completed,
            "on-hold" | "on_hold" | "on hold" => Self::OnHold,
            "planning" => Self::Planning,
            "" => Self::Other("unknown".to_string()),
            _ => Self::Other(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Planning => "planning",
            Self::Other(other) => other.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Other("unknown".to_string())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Needed head count per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StaffingTargets {
    pub collectors: u32,
    pub supervisors: u32,
    pub backcheckers: u32,
}

impl StaffingTargets {
    pub fn total(&self) -> u64 {
        u64::from(self.collectors) + u64::from(self.supervisors) + u64::from(self.backcheckers)
    }
}

/// Member lists recorded directly on the project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmbeddedRoster {
    pub data_collectors: Vec<Member>,
    pub supervisors: Vec<Member>,
    pub backcheckers: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub remote_id: Option<i64>,
    pub name: String,
    pub scrum_master: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub duration_days: Option<i64>,
    pub status: ProjectStatus,
    pub targets: StaffingTargets,
    pub embedded: EmbeddedRoster,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Option<i64>,
    pub team_member: i64,
    pub project: i64,
    pub rating: Option<u8>,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreedMember {
    pub name: String,
    pub ve_code: Option<String>,
}

/// Outcome of ending a project, as reported by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EndProjectSummary {
    pub total_unassigned: u32,
    pub made_available: u32,
    pub still_deployed: u32,
    pub members_made_available: Vec<FreedMember>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectExport {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ProjectExport {
    /// Spreadsheet responses get an `.xlsx` name, anything else is treated as CSV.
    pub fn new(project_key: &str, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = content_type.into();
        let extension = if content_type.contains("spreadsheet") {
            "xlsx"
        } else {
            "csv"
        };

        Self {
            file_name: format!("{project_key}_members.{extension}"),
            content_type,
            bytes,
        }
    }
}
