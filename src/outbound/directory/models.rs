use crate::domain::staffing::{
    EmbeddedRoster, EndProjectSummary, FreedMember, Member, MemberStatus, Project, ProjectStatus,
    ProjectTargets, Rating, StaffingTargets,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use time::Date;
use time::macros::format_description;

// The directory is loose about numbers: counts and scores show up as numbers,
// numeric strings or null depending on the endpoint.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count(value: &Value) -> u32 {
    integer(value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or_default()
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn date(value: &Value, project_key: &str, field: &str) -> Option<Date> {
    let raw = text(value)?;
    let day = raw.get(..10).unwrap_or(raw.as_str());
    match Date::parse(day, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(project = project_key, field, raw = %raw, "ignoring unparseable date");
            None
        }
    }
}

//------------------------------------------------------------------------------
// Members
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct MemberRecord {
    pub id: Value,
    pub name: Value,
    pub ve_code: Value,
    pub role: Value,
    pub status: Value,
    pub performance_score: Value,
    pub rotation_rank: Value,
    pub assigned_projects: Value,
    pub current_project: Value,
    pub assigned_projects_count: Value,
}

impl From<MemberRecord> for Member {
    fn from(value: MemberRecord) -> Self {
        let assigned_projects: Vec<String> = match &value.assigned_projects {
            Value::Array(items) => items.iter().filter_map(text).collect(),
            _ => vec![],
        };
        let assigned_projects_count = match integer(&value.assigned_projects_count) {
            Some(n) => u32::try_from(n).unwrap_or_default(),
            None => assigned_projects.len() as u32,
        };

        Self {
            id: integer(&value.id),
            name: text(&value.name).unwrap_or_default(),
            ve_code: text(&value.ve_code),
            role: text(&value.role).unwrap_or_default(),
            status: text(&value.status)
                .map(|s| MemberStatus::parse(&s))
                .unwrap_or_default(),
            performance_score: number(&value.performance_score),
            rotation_rank: integer(&value.rotation_rank),
            assigned_projects,
            current_project: text(&value.current_project),
            assigned_projects_count,
        }
    }
}

/// `GET /col/teammembers/` answers either `{ "data": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MemberList {
    Wrapped { data: Vec<MemberRecord> },
    Bare(Vec<MemberRecord>),
}

impl From<MemberList> for Vec<Member> {
    fn from(value: MemberList) -> Self {
        let records = match value {
            MemberList::Wrapped { data } => data,
            MemberList::Bare(records) => records,
        };
        records.into_iter().map(Member::from).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MemberEnvelope {
    Wrapped { data: MemberRecord },
    Bare(MemberRecord),
}

impl From<MemberEnvelope> for Member {
    fn from(value: MemberEnvelope) -> Self {
        match value {
            MemberEnvelope::Wrapped { data } => data.into(),
            MemberEnvelope::Bare(record) => record.into(),
        }
    }
}

//------------------------------------------------------------------------------
// Projects
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProjectInfoRecord {
    pub id: Value,
    pub name: Value,
    pub status: Value,
    pub scrum_master: Value,
    pub start_date: Value,
    pub end_date: Value,
    pub duration_days: Value,
    pub collectors_needed: Value,
    pub supervisors_needed: Value,
    pub backcheckers_needed: Value,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProjectRecord {
    pub project_info: Option<ProjectInfoRecord>,
    pub data_collectors: Option<Vec<MemberRecord>>,
    pub supervisors: Option<Vec<MemberRecord>>,
    pub backcheckers: Option<Vec<MemberRecord>>,
}

impl ProjectRecord {
    pub fn into_project(self, key: String) -> Project {
        let info = self.project_info.unwrap_or_default();
        let members = |records: Option<Vec<MemberRecord>>| -> Vec<Member> {
            records
                .unwrap_or_default()
                .into_iter()
                .map(Member::from)
                .collect()
        };

        Project {
            remote_id: integer(&info.id),
            name: text(&info.name).unwrap_or_else(|| key.clone()),
            scrum_master: text(&info.scrum_master),
            start_date: date(&info.start_date, &key, "start_date"),
            end_date: date(&info.end_date, &key, "end_date"),
            duration_days: integer(&info.duration_days),
            status: ProjectStatus::parse(&text(&info.status).unwrap_or_default()),
            targets: StaffingTargets {
                collectors: count(&info.collectors_needed),
                supervisors: count(&info.supervisors_needed),
                backcheckers: count(&info.backcheckers_needed),
            },
            embedded: EmbeddedRoster {
                data_collectors: members(self.data_collectors),
                supervisors: members(self.supervisors),
                backcheckers: members(self.backcheckers),
            },
            key,
        }
    }
}

fn into_projects(records: Option<BTreeMap<String, ProjectRecord>>) -> Vec<Project> {
    records
        .unwrap_or_default()
        .into_iter()
        .map(|(key, record)| record.into_project(key))
        .collect()
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ActiveProjectsResponse {
    pub active_projects: Option<BTreeMap<String, ProjectRecord>>,
}

impl From<ActiveProjectsResponse> for Vec<Project> {
    fn from(value: ActiveProjectsResponse) -> Self {
        into_projects(value.active_projects)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AllProjectsResponse {
    pub projects: Option<BTreeMap<String, ProjectRecord>>,
}

impl From<AllProjectsResponse> for Vec<Project> {
    fn from(value: AllProjectsResponse) -> Self {
        into_projects(value.projects)
    }
}

/// Body of `POST /col/assign-project/`. The directory names the scrum master
/// `name` and the project `projectName`.
#[derive(Debug, Serialize)]
pub struct SaveProjectRequest {
    pub name: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub status: String,
    pub num_data_collectors: u32,
    pub num_supervisors: u32,
    pub num_backcheckers: u32,
}

impl From<ProjectTargets> for SaveProjectRequest {
    fn from(value: ProjectTargets) -> Self {
        Self {
            name: value.scrum_master,
            project_name: value.project_name,
            start_date: value.start_date.to_string(),
            end_date: value.end_date.to_string(),
            status: value.status.to_string(),
            num_data_collectors: value.targets.collectors,
            num_supervisors: value.targets.supervisors,
            num_backcheckers: value.targets.backcheckers,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectNameRequest<'a> {
    pub project_name: &'a str,
}

//------------------------------------------------------------------------------
// Ratings
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RatingRecord {
    pub id: Value,
    pub team_member: Value,
    pub project: Value,
    pub rating: Value,
    pub feedback: Value,
}

impl RatingRecord {
    /// Ratings that do not name both a member and a project are dropped.
    pub fn into_rating(self) -> Option<Rating> {
        Some(Rating {
            id: integer(&self.id),
            team_member: integer(&self.team_member)?,
            project: integer(&self.project)?,
            rating: integer(&self.rating)
                .and_then(|r| u8::try_from(r).ok())
                .filter(|r| *r > 0),
            feedback: text(&self.feedback).unwrap_or_default(),
        })
    }
}

//------------------------------------------------------------------------------
// Messages & end project
//------------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// Error bodies carry their text under `message`, `detail` or `error`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Value,
    pub detail: Value,
    pub error: Value,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        text(&self.message)
            .or_else(|| text(&self.detail))
            .or_else(|| text(&self.error))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EndProjectCounts {
    pub total_unassigned: Value,
    pub made_available: Value,
    pub still_deployed: Value,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct EndProjectResponse {
    pub summary: Option<EndProjectCounts>,
    pub members_made_available: Option<Vec<MemberRecord>>,
}

impl From<EndProjectResponse> for EndProjectSummary {
    fn from(value: EndProjectResponse) -> Self {
        let counts = value.summary.unwrap_or_default();

        Self {
            total_unassigned: count(&counts.total_unassigned),
            made_available: count(&counts.made_available),
            still_deployed: count(&counts.still_deployed),
            members_made_available: value
                .members_made_available
                .unwrap_or_default()
                .into_iter()
                .map(|record| FreedMember {
                    name: text(&record.name).unwrap_or_default(),
                    ve_code: text(&record.ve_code),
                })
                .collect(),
        }
    }
}
