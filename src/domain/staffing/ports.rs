use crate::domain::staffing::{
    AssignmentRejected, DashboardSummary, EndProjectSummary, Member, MemberDraft, MemberFilter,
    MemberUpdate, MemberValidationError, NewMember, Project, ProjectExport, ProjectForm,
    ProjectRoster, ProjectTargets, ProjectValidationError, Rating, RatingSplit,
    RatingSubmission, RatingValidationError, RoleCounts,
};
use crate::outbound::directory::error::Error as DirectoryError;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StaffingService: Send + Sync {
    async fn active_projects(&self) -> Result<GetActiveProjectsResult, GetActiveProjectsError>;
    async fn all_projects(&self) -> Result<GetAllProjectsResult, GetAllProjectsError>;
    async fn project_detail(
        &self,
        params: ProjectDetailServiceParams,
    ) -> Result<GetProjectDetailResult, GetProjectDetailError>;
    async fn dashboard_summary(&self) -> Result<GetDashboardResult, GetDashboardError>;

    async fn list_members(
        &self,
        params: ListMembersServiceParams,
    ) -> Result<ListMembersResult, ListMembersError>;
    async fn create_member(
        &self,
        params: CreateMemberServiceParams,
    ) -> Result<MemberResult, CreateMemberError>;
    async fn update_member(
        &self,
        params: UpdateMemberServiceParams,
    ) -> Result<MemberResult, UpdateMemberError>;
    async fn delete_member(&self, params: DeleteMemberServiceParams)
    -> Result<(), DeleteMemberError>;

    async fn assign_member(
        &self,
        params: MembershipServiceParams,
    ) -> Result<MembershipResult, AssignMemberError>;
    async fn unassign_member(
        &self,
        params: MembershipServiceParams,
    ) -> Result<MembershipResult, AssignMemberError>;

    async fn save_project(
        &self,
        params: SaveProjectServiceParams,
    ) -> Result<SaveProjectResult, SaveProjectError>;
    async fn end_project(
        &self,
        params: EndProjectServiceParams,
    ) -> Result<EndProjectSummary, EndProjectError>;
    async fn submit_rating(
        &self,
        params: SubmitRatingServiceParams,
    ) -> Result<RatingSubmission, SubmitRatingError>;
    async fn export_project(
        &self,
        params: ExportProjectServiceParams,
    ) -> Result<ProjectExport, ExportProjectError>;
}

//------------------------------------------------------------------------------
// Active Projects
//------------------------------------------------------------------------------

/// An active project with its reconciled roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectOverview {
    pub project: Project,
    pub roster: ProjectRoster,
    pub staffed_percent: u8,
}

pub struct GetActiveProjectsResult {
    pub projects: Vec<ProjectOverview>,
}

#[derive(Debug, Error)]
pub enum GetActiveProjectsError {
    #[error("failed to get active projects because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// All Projects
//------------------------------------------------------------------------------

/// A project counted from its embedded lists only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectListing {
    pub project: Project,
    pub assigned: RoleCounts,
    pub staffed_percent: u8,
}

pub struct GetAllProjectsResult {
    pub active: Vec<ProjectListing>,
    /// `None` when the all-status listing could not be fetched.
    pub completed: Option<Vec<ProjectListing>>,
}

#[derive(Debug, Error)]
pub enum GetAllProjectsError {
    #[error("failed to get projects because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Project Detail
//------------------------------------------------------------------------------

pub struct ProjectDetailServiceParams {
    pub project_key: String,
}

pub struct GetProjectDetailResult {
    pub overview: ProjectOverview,
    pub ratings: RatingSplit,
}

#[derive(Debug, Error)]
pub enum GetProjectDetailError {
    #[error("project \"{0}\" is not an active project")]
    NotFound(String),

    #[error("failed to get project detail because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Dashboard
//------------------------------------------------------------------------------

pub struct GetDashboardResult {
    pub summary: DashboardSummary,
}

#[derive(Debug, Error)]
pub enum GetDashboardError {
    #[error("failed to get dashboard because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// List Members
//------------------------------------------------------------------------------

pub struct ListMembersServiceParams {
    pub filter: MemberFilter,
}

pub struct ListMembersResult {
    pub members: Vec<Member>,
}

#[derive(Debug, Error)]
pub enum ListMembersError {
    #[error("failed to list members because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Create / Update / Delete Member
//------------------------------------------------------------------------------

pub struct CreateMemberServiceParams {
    pub member: NewMember,
}

pub struct UpdateMemberServiceParams {
    pub member_id: i64,
    pub draft: MemberDraft,
}

pub struct DeleteMemberServiceParams {
    pub member_id: i64,
}

pub struct MemberResult {
    pub member: Member,
}

#[derive(Debug, Error)]
pub enum CreateMemberError {
    #[error(transparent)]
    Invalid(#[from] MemberValidationError),

    #[error("failed to create member because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

#[derive(Debug, Error)]
pub enum UpdateMemberError {
    #[error(transparent)]
    Invalid(#[from] MemberValidationError),

    #[error("draft belongs to member {draft}, not {path}")]
    IdMismatch { path: i64, draft: i64 },

    #[error("draft has no changes")]
    NoChanges,

    #[error("failed to update member because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

#[derive(Debug, Error)]
pub enum DeleteMemberError {
    #[error("member {0} is already being deleted")]
    AlreadyInProgress(i64),

    #[error("failed to delete member because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Assign / Unassign
//------------------------------------------------------------------------------

pub struct MembershipServiceParams {
    pub project_key: String,
    pub member_id: i64,
}

pub struct MembershipResult {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AssignMemberError {
    #[error("member {0} not found")]
    MemberNotFound(i64),

    #[error(transparent)]
    Rejected(#[from] AssignmentRejected),

    #[error("failed to change assignment because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Save Project
//------------------------------------------------------------------------------

pub struct SaveProjectServiceParams {
    pub form: ProjectForm,
}

pub struct SaveProjectResult {
    pub project_name: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SaveProjectError {
    #[error(transparent)]
    Invalid(#[from] ProjectValidationError),

    #[error("failed to save project because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// End Project
//------------------------------------------------------------------------------

pub struct EndProjectServiceParams {
    pub project_key: String,
}

#[derive(Debug, Error)]
pub enum EndProjectError {
    #[error("project \"{0}\" is already being ended")]
    AlreadyInProgress(String),

    #[error("failed to end project because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Submit Rating
//------------------------------------------------------------------------------

pub struct SubmitRatingServiceParams {
    pub project: Option<i64>,
    pub team_member: Option<i64>,
    pub rating: Option<u8>,
    pub feedback: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitRatingError {
    #[error(transparent)]
    Invalid(#[from] RatingValidationError),

    #[error("failed to submit rating because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

//------------------------------------------------------------------------------
// Export Project
//------------------------------------------------------------------------------

pub struct ExportProjectServiceParams {
    pub project_key: String,
}

#[derive(Debug, Error)]
pub enum ExportProjectError {
    #[error("failed to export project because of directory error")]
    DirectoryError(#[from] DirectoryError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Directory
////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryPort: Send + Sync + 'static {
    async fn list_members(&self) -> Result<Vec<Member>, DirectoryError>;
    async fn list_active_projects(&self) -> Result<Vec<Project>, DirectoryError>;
    async fn list_all_projects(&self) -> Result<Vec<Project>, DirectoryError>;
    async fn list_ratings(&self) -> Result<Vec<Rating>, DirectoryError>;

    async fn create_member(&self, member: NewMember) -> Result<Member, DirectoryError>;
    async fn update_member(&self, params: UpdateMemberDirParams)
    -> Result<Member, DirectoryError>;
    async fn delete_member(&self, member_id: i64) -> Result<(), DirectoryError>;

    async fn assign_member(&self, params: MembershipDirParams) -> Result<String, DirectoryError>;
    async fn unassign_member(&self, params: MembershipDirParams)
    -> Result<String, DirectoryError>;

    async fn save_project(&self, project: ProjectTargets) -> Result<String, DirectoryError>;
    async fn end_project(&self, project_key: String) -> Result<EndProjectSummary, DirectoryError>;
    async fn submit_rating(&self, submission: RatingSubmission) -> Result<(), DirectoryError>;
    async fn export_project(&self, project_key: String) -> Result<ProjectExport, DirectoryError>;
}

//------------------------------------------------------------------------------
// Update Member
//------------------------------------------------------------------------------

pub struct UpdateMemberDirParams {
    pub member_id: i64,
    pub update: MemberUpdate,
}

//------------------------------------------------------------------------------
// Assign / Unassign Member
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipDirParams {
    #[serde(rename = "project_name")]
    pub project_key: String,
    pub member_id: i64,
}
