use crate::domain::staffing::{DATA_COLLECTOR, Member, MemberStatus, ProjectStatus, StaffingTargets};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use time::macros::format_description;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberValidationError {
    #[error("name and VE code are required")]
    MissingIdentity,

    #[error("member has no directory id")]
    MissingId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub ve_code: String,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_status")]
    pub status: MemberStatus,
    #[serde(default = "default_rotation_rank")]
    pub rotation_rank: i64,
}

fn default_role() -> String {
    DATA_COLLECTOR.to_string()
}

fn default_status() -> MemberStatus {
    MemberStatus::Available
}

fn default_rotation_rank() -> i64 {
    1
}

impl NewMember {
    pub fn new(name: impl Into<String>, ve_code: impl Into<String>) -> Self {
        Self {
            ve_code: ve_code.into(),
            name: name.into(),
            role: default_role(),
            status: default_status(),
            rotation_rank: default_rotation_rank(),
        }
    }

    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() || self.ve_code.trim().is_empty() {
            return Err(MemberValidationError::MissingIdentity);
        }

        Ok(())
    }
}

/// Only the fields a draft actually changed. `Some(None)` clears a field
/// and goes out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ve_code: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_rank: Option<Option<i64>>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Editable copy of one roster row. The fetched record stays untouched and
/// every edit yields a new draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    original: Member,
    name: String,
    ve_code: Option<String>,
    role: String,
    status: MemberStatus,
    rotation_rank: Option<i64>,
}

impl From<&Member> for MemberDraft {
    fn from(value: &Member) -> Self {
        Self {
            original: value.clone(),
            name: value.name.clone(),
            ve_code: value.ve_code.clone(),
            role: value.role.clone(),
            status: value.status,
            rotation_rank: value.rotation_rank,
        }
    }
}

impl MemberDraft {
    pub fn original(&self) -> &Member {
        &self.original
    }

    pub fn member_id(&self) -> Result<i64, MemberValidationError> {
        self.original.id.ok_or(MemberValidationError::MissingId)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_ve_code(self, ve_code: Option<String>) -> Self {
        Self { ve_code, ..self }
    }

    pub fn with_role(self, role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..self
        }
    }

    pub fn with_status(self, status: MemberStatus) -> Self {
        Self { status, ..self }
    }

    pub fn with_rotation_rank(self, rotation_rank: Option<i64>) -> Self {
        Self {
            rotation_rank,
            ..self
        }
    }

    pub fn changes(&self) -> MemberUpdate {
        fn changed<T: PartialEq + Clone>(draft: &T, original: &T) -> Option<T> {
            (draft != original).then(|| draft.clone())
        }

        MemberUpdate {
            name: changed(&self.name, &self.original.name),
            ve_code: changed(&self.ve_code, &self.original.ve_code),
            role: changed(&self.role, &self.original.role),
            status: changed(&self.status, &self.original.status),
            rotation_rank: changed(&self.rotation_rank, &self.original.rotation_rank),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.changes().is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid date for {0}, expected YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("end date is before start date")]
    EndBeforeStart,
}

/// Raw project form as submitted. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct ProjectForm {
    pub project_name: Option<String>,
    pub scrum_master: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub collectors_needed: Option<u32>,
    pub supervisors_needed: Option<u32>,
    pub backcheckers_needed: Option<u32>,
}

/// A validated create-or-update of a project's staffing targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTargets {
    pub project_name: String,
    pub scrum_master: String,
    pub start_date: Date,
    pub end_date: Date,
    pub status: ProjectStatus,
    pub targets: StaffingTargets,
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, ProjectValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ProjectValidationError::MissingField(field))
}

fn parse_date(value: &str, field: &'static str) -> Result<Date, ProjectValidationError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ProjectValidationError::InvalidDate(field))
}

impl ProjectForm {
    pub fn validate(&self) -> Result<ProjectTargets, ProjectValidationError> {
        let project_name = required(&self.project_name, "project_name")?;
        let scrum_master = required(&self.scrum_master, "scrum_master")?;
        let start_date = parse_date(&required(&self.start_date, "start_date")?, "start_date")?;
        let end_date = parse_date(&required(&self.end_date, "end_date")?, "end_date")?;
        if end_date < start_date {
            return Err(ProjectValidationError::EndBeforeStart);
        }

        let targets = StaffingTargets {
            collectors: self
                .collectors_needed
                .ok_or(ProjectValidationError::MissingField("collectors_needed"))?,
            supervisors: self
                .supervisors_needed
                .ok_or(ProjectValidationError::MissingField("supervisors_needed"))?,
            backcheckers: self
                .backcheckers_needed
                .ok_or(ProjectValidationError::MissingField("backcheckers_needed"))?,
        };

        let status = self
            .status
            .as_deref()
            .map(ProjectStatus::parse)
            .unwrap_or(ProjectStatus::Active);

        Ok(ProjectTargets {
            project_name,
            scrum_master,
            start_date,
            end_date,
            status,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched() -> Member {
        Member {
            id: Some(3),
            name: "Ana".to_string(),
            ve_code: Some("VE3".to_string()),
            role: "collector".to_string(),
            status: MemberStatus::Available,
            rotation_rank: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_member_defaults() {
        let member: NewMember = serde_json::from_str(r#"{"name":"Ana","ve_code":"VE1"}"#).unwrap();

        assert_eq!(NewMember::new("Ana", "VE1"), member);
        assert_eq!("data_collector", member.role);
        assert_eq!(MemberStatus::Available, member.status);
        assert_eq!(1, member.rotation_rank);
    }

    #[test]
    fn test_new_member_requires_identity() {
        assert_eq!(
            Err(MemberValidationError::MissingIdentity),
            NewMember::new("Ana", " ").validate()
        );
        assert_eq!(
            Err(MemberValidationError::MissingIdentity),
            NewMember::new("", "VE1").validate()
        );
        assert!(NewMember::new("Ana", "VE1").validate().is_ok());
    }

    #[test]
    fn test_clean_draft() {
        let member = fetched();
        let draft = MemberDraft::from(&member);

        assert!(!draft.is_dirty());
        assert!(draft.changes().is_empty());
    }

    #[test]
    fn test_draft_edits_leave_original_untouched() {
        let member = fetched();

        let draft = MemberDraft::from(&member)
            .with_name("Ana Mensah")
            .with_status(MemberStatus::Inactive);

        assert!(draft.is_dirty());
        assert_eq!("Ana", member.name);
        assert_eq!("Ana", draft.original().name);
        assert_eq!(
            MemberUpdate {
                name: Some("Ana Mensah".to_string()),
                status: Some(MemberStatus::Inactive),
                ..Default::default()
            },
            draft.changes()
        );
    }

    #[test]
    fn test_draft_reverted_edit_is_clean() {
        let member = fetched();

        let draft = MemberDraft::from(&member)
            .with_role("supervisor")
            .with_role("collector");

        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_update_serializes_only_changes() {
        let draft = MemberDraft::from(&fetched()).with_rotation_rank(Some(5));

        let json = serde_json::to_value(draft.changes()).unwrap();

        assert_eq!(serde_json::json!({ "rotation_rank": 5 }), json);
    }

    #[test]
    fn test_draft_clearing_fields_is_a_change() {
        let draft = MemberDraft::from(&fetched())
            .with_ve_code(None)
            .with_rotation_rank(None);

        assert!(draft.is_dirty());
        assert_eq!(
            MemberUpdate {
                ve_code: Some(None),
                rotation_rank: Some(None),
                ..Default::default()
            },
            draft.changes()
        );
        assert_eq!(
            serde_json::json!({ "ve_code": null, "rotation_rank": null }),
            serde_json::to_value(draft.changes()).unwrap()
        );
    }

    #[test]
    fn test_member_id() {
        let anonymous = Member::default();

        assert_eq!(Ok(3), MemberDraft::from(&fetched()).member_id());
        assert_eq!(
            Err(MemberValidationError::MissingId),
            MemberDraft::from(&anonymous).member_id()
        );
    }

    fn complete_form() -> ProjectForm {
        ProjectForm {
            project_name: Some("Survey-2024".to_string()),
            scrum_master: Some("Abena".to_string()),
            start_date: Some("2024-03-01".to_string()),
            end_date: Some("2024-04-15".to_string()),
            status: None,
            collectors_needed: Some(3),
            supervisors_needed: Some(1),
            backcheckers_needed: Some(0),
        }
    }

    #[test]
    fn test_project_form_validates() {
        let targets = complete_form().validate().unwrap();

        assert_eq!("Survey-2024", targets.project_name);
        assert_eq!(ProjectStatus::Active, targets.status);
        assert_eq!(4, targets.targets.total());
        assert_eq!(time::macros::date!(2024 - 03 - 01), targets.start_date);
    }

    #[test]
    fn test_project_form_missing_fields() {
        let form = ProjectForm {
            scrum_master: Some("  ".to_string()),
            ..complete_form()
        };
        assert_eq!(
            Err(ProjectValidationError::MissingField("scrum_master")),
            form.validate()
        );

        let form = ProjectForm {
            backcheckers_needed: None,
            ..complete_form()
        };
        assert_eq!(
            Err(ProjectValidationError::MissingField("backcheckers_needed")),
            form.validate()
        );
    }

    #[test]
    fn test_project_form_dates() {
        let form = ProjectForm {
            start_date: Some("01/03/2024".to_string()),
            ..complete_form()
        };
        assert_eq!(
            Err(ProjectValidationError::InvalidDate("start_date")),
            form.validate()
        );

        let form = ProjectForm {
            end_date: Some("2024-02-01".to_string()),
            ..complete_form()
        };
        assert_eq!(Err(ProjectValidationError::EndBeforeStart), form.validate());
    }
}
