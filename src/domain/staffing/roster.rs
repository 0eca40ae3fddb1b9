use crate::domain::staffing::{EmbeddedRoster, Member, MemberStatus, Role};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_VE_CODE: &str = "N/A";
const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    /// Listed on the project record itself.
    Embedded,
    /// Found through the member's own assignment list.
    Directory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub member: Member,
    #[serde(rename = "assigned_role")]
    pub role: Role,
    pub source: EntrySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct RoleCounts {
    pub collectors: u32,
    pub supervisors: u32,
    pub backcheckers: u32,
}

impl RoleCounts {
    pub fn total(&self) -> u64 {
        u64::from(self.collectors) + u64::from(self.supervisors) + u64::from(self.backcheckers)
    }
}

impl From<&EmbeddedRoster> for RoleCounts {
    fn from(value: &EmbeddedRoster) -> Self {
        Self {
            collectors: value.data_collectors.len() as u32,
            supervisors: value.supervisors.len() as u32,
            backcheckers: value.backcheckers.len() as u32,
        }
    }
}

/// The canonical, deduplicated set of members on one project.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ProjectRoster {
    pub data_collectors: Vec<RosterEntry>,
    pub supervisors: Vec<RosterEntry>,
    pub backcheckers: Vec<RosterEntry>,
}

impl ProjectRoster {
    pub fn all(&self) -> Vec<&RosterEntry> {
        self.data_collectors
            .iter()
            .chain(self.supervisors.iter())
            .chain(self.backcheckers.iter())
            .collect()
    }

    pub fn counts(&self) -> RoleCounts {
        RoleCounts {
            collectors: self.data_collectors.len() as u32,
            supervisors: self.supervisors.len() as u32,
            backcheckers: self.backcheckers.len() as u32,
        }
    }

    pub fn len(&self) -> usize {
        self.data_collectors.len() + self.supervisors.len() + self.backcheckers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fills fields missing on embedded entries from the directory record with
    /// the same trimmed name. Values already present on the entry win.
    pub fn with_directory_details(&self, directory: &[Member]) -> Self {
        let by_name: HashMap<&str, &Member> = directory
            .iter()
            .map(|member| (member.trimmed_name(), member))
            .collect();

        let augment = |entries: &[RosterEntry]| -> Vec<RosterEntry> {
            entries
                .iter()
                .map(|entry| {
                    if entry.source != EntrySource::Embedded {
                        return entry.clone();
                    }
                    let full = by_name.get(entry.member.trimmed_name()).copied();
                    RosterEntry {
                        member: merge_member(&entry.member, full),
                        role: entry.role,
                        source: entry.source,
                    }
                })
                .collect()
        };

        Self {
            data_collectors: augment(&self.data_collectors),
            supervisors: augment(&self.supervisors),
            backcheckers: augment(&self.backcheckers),
        }
    }
}

fn merge_member(partial: &Member, full: Option<&Member>) -> Member {
    let Some(full) = full else {
        let mut member = partial.clone();
        if member.trimmed_name().is_empty() {
            member.name = UNKNOWN_NAME.to_string();
        }
        return member;
    };

    let ve_code = match partial.ve_code.as_deref() {
        Some(code) if !code.is_empty() && code != MISSING_VE_CODE => Some(code.to_string()),
        _ => full
            .ve_code
            .clone()
            .filter(|code| !code.is_empty())
            .or_else(|| Some(MISSING_VE_CODE.to_string())),
    };

    let name = if partial.trimmed_name().is_empty() {
        if full.trimmed_name().is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            full.name.clone()
        }
    } else {
        partial.name.clone()
    };

    Member {
        id: partial.id.or(full.id),
        name,
        ve_code,
        role: if partial.role.is_empty() {
            full.role.clone()
        } else {
            partial.role.clone()
        },
        status: match partial.status {
            MemberStatus::Unknown => full.status,
            status => status,
        },
        performance_score: partial.performance_score.or(full.performance_score),
        rotation_rank: partial.rotation_rank.or(full.rotation_rank),
        assigned_projects: if partial.assigned_projects.is_empty() {
            full.assigned_projects.clone()
        } else {
            partial.assigned_projects.clone()
        },
        current_project: partial
            .current_project
            .clone()
            .or_else(|| full.current_project.clone()),
        assigned_projects_count: partial
            .assigned_projects_count
            .max(full.assigned_projects_count),
    }
}

/// Merges a project's embedded role lists with the members whose own
/// assignment list names the project. Within each role, entries are
/// deduplicated by trimmed name and the embedded entry wins.
pub fn reconcile(project_key: &str, embedded: &EmbeddedRoster, directory: &[Member]) -> ProjectRoster {
    let bucket = |role: Role, primary: &[Member]| -> Vec<RosterEntry> {
        let mut entries: Vec<RosterEntry> = primary
            .iter()
            .map(|member| {
                let mut member = member.clone();
                if member.ve_code.as_deref().is_none_or(str::is_empty) {
                    member.ve_code = Some(MISSING_VE_CODE.to_string());
                }
                RosterEntry {
                    member,
                    role,
                    source: EntrySource::Embedded,
                }
            })
            .collect();

        let secondary: Vec<RosterEntry> = directory
            .iter()
            .filter(|member| member.is_assigned_to(project_key) && role.matches(&member.role))
            .filter(|member| {
                !primary
                    .iter()
                    .any(|existing| existing.trimmed_name() == member.trimmed_name())
            })
            .map(|member| RosterEntry {
                member: member.clone(),
                role,
                source: EntrySource::Directory,
            })
            .collect();

        entries.extend(secondary);
        entries
    };

    ProjectRoster {
        data_collectors: bucket(Role::DataCollector, &embedded.data_collectors),
        supervisors: bucket(Role::Supervisor, &embedded.supervisors),
        backcheckers: bucket(Role::Backchecker, &embedded.backcheckers),
    }
}
