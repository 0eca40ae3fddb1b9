use crate::domain::staffing::{Member, MemberStatus, normalize_role};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentRejected {
    #[error("select a project first")]
    NoProjectSelected,

    #[error("member is not available to assign")]
    NotAvailable,

    #[error("member is not assigned to \"{0}\"")]
    NotAssigned(String),
}

pub fn can_assign(member: &Member, project_key: &str) -> Result<(), AssignmentRejected> {
    if project_key.trim().is_empty() {
        return Err(AssignmentRejected::NoProjectSelected);
    }
    if member.status != MemberStatus::Available {
        return Err(AssignmentRejected::NotAvailable);
    }

    Ok(())
}

pub fn can_unassign(member: &Member, project_key: &str) -> Result<(), AssignmentRejected> {
    if project_key.trim().is_empty() {
        return Err(AssignmentRejected::NoProjectSelected);
    }
    if !member.is_assigned_to(project_key) {
        return Err(AssignmentRejected::NotAssigned(project_key.to_string()));
    }

    Ok(())
}

/// Roster table filter. Empty fields match everything.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<MemberStatus>,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        let search_matches = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                member.name.to_lowercase().contains(&query)
                    || member
                        .ve_code
                        .as_deref()
                        .is_some_and(|code| code.to_lowercase().contains(&query))
            }
        };

        let role_matches = match self.role.as_deref().map(normalize_role) {
            None => true,
            Some(role) if role.is_empty() => true,
            Some(role) => normalize_role(&member.role) == role,
        };

        let status_matches = self.status.is_none_or(|status| member.status == status);

        search_matches && role_matches && status_matches
    }

    pub fn apply(&self, members: Vec<Member>) -> Vec<Member> {
        members.into_iter().filter(|m| self.matches(m)).collect()
    }
}
