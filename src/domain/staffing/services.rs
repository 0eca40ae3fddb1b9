use crate::domain::staffing::{
    AssignMemberError, CreateMemberError, CreateMemberServiceParams, DeleteMemberError,
    DeleteMemberServiceParams, DirectoryPort, EndProjectError, EndProjectServiceParams,
    EndProjectSummary, ExportProjectError, ExportProjectServiceParams, GetActiveProjectsError,
    GetActiveProjectsResult, GetAllProjectsError, GetAllProjectsResult, GetDashboardError,
    GetDashboardResult, GetProjectDetailError, GetProjectDetailResult, InFlight,
    ListMembersError, ListMembersResult, ListMembersServiceParams, Member, MemberResult,
    MembershipDirParams, MembershipResult, MembershipServiceParams, Project,
    ProjectDetailServiceParams, ProjectExport, ProjectListing, ProjectOverview, ProjectStatus,
    RatingSplit, RatingSubmission, RoleCounts,
    SaveProjectError, SaveProjectResult, SaveProjectServiceParams, StaffingService,
    SubmitRatingError, SubmitRatingServiceParams, UpdateMemberDirParams, UpdateMemberError,
    UpdateMemberServiceParams, can_assign, can_unassign, dashboard_summary, reconcile,
    split_by_rating, staffed_percent,
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Service<DIR>
where
    DIR: DirectoryPort,
{
    directory: Arc<DIR>,
    in_flight: Arc<InFlight>,
}

impl<DIR> Service<DIR>
where
    DIR: DirectoryPort,
{
    pub fn new(directory: DIR) -> Self {
        Self {
            directory: Arc::new(directory),
            in_flight: Arc::new(InFlight::new()),
        }
    }

    fn listing(project: Project) -> ProjectListing {
        let assigned = RoleCounts::from(&project.embedded);
        let staffed_percent = staffed_percent(&project.targets, &assigned);

        ProjectListing {
            project,
            assigned,
            staffed_percent,
        }
    }

    fn overview(project: Project, directory: &[Member]) -> ProjectOverview {
        let roster = reconcile(&project.key, &project.embedded, directory);
        let staffed_percent = staffed_percent(&project.targets, &roster.counts());

        ProjectOverview {
            project,
            roster,
            staffed_percent,
        }
    }
}

#[async_trait]
impl<DIR> StaffingService for Service<DIR>
where
    DIR: DirectoryPort,
{
    async fn active_projects(&self) -> Result<GetActiveProjectsResult, GetActiveProjectsError> {
        let (projects, members) = tokio::try_join!(
            self.directory.list_active_projects(),
            self.directory.list_members()
        )?;

        let projects = projects
            .into_iter()
            .filter(|project| project.status.is_active())
            .map(|project| Self::overview(project, &members))
            .collect();

        Ok(GetActiveProjectsResult { projects })
    }

    async fn all_projects(&self) -> Result<GetAllProjectsResult, GetAllProjectsError> {
        let (active, all) = tokio::join!(
            self.directory.list_active_projects(),
            self.directory.list_all_projects()
        );

        let active = active?
            .into_iter()
            .filter(|project| project.status.is_active())
            .map(Self::listing)
            .collect();

        let completed = match all {
            Ok(projects) => Some(
                projects
                    .into_iter()
                    .filter(|project| project.status == ProjectStatus::Completed)
                    .map(Self::listing)
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!("could not load all-status projects: {e}");
                None
            }
        };

        Ok(GetAllProjectsResult { active, completed })
    }

    async fn project_detail(
        &self,
        params: ProjectDetailServiceParams,
    ) -> Result<GetProjectDetailResult, GetProjectDetailError> {
        let (projects, members, ratings) = tokio::try_join!(
            self.directory.list_active_projects(),
            self.directory.list_members(),
            self.directory.list_ratings()
        )?;

        let project = projects
            .into_iter()
            .find(|project| project.key == params.project_key)
            .ok_or_else(|| GetProjectDetailError::NotFound(params.project_key.clone()))?;

        let mut overview = Self::overview(project, &members);
        overview.roster = overview.roster.with_directory_details(&members);

        let ratings = match overview.project.remote_id {
            Some(project_id) => split_by_rating(project_id, &overview.roster, &ratings, &members),
            None => RatingSplit {
                rated: vec![],
                unrated: overview.roster.all().into_iter().cloned().collect(),
            },
        };

        Ok(GetProjectDetailResult { overview, ratings })
    }

    async fn dashboard_summary(&self) -> Result<GetDashboardResult, GetDashboardError> {
        let (members, projects) = tokio::try_join!(
            self.directory.list_members(),
            self.directory.list_active_projects()
        )?;

        Ok(GetDashboardResult {
            summary: dashboard_summary(&members, &projects),
        })
    }

    async fn list_members(
        &self,
        params: ListMembersServiceParams,
    ) -> Result<ListMembersResult, ListMembersError> {
        let members = self.directory.list_members().await?;

        Ok(ListMembersResult {
            members: params.filter.apply(members),
        })
    }

    async fn create_member(
        &self,
        params: CreateMemberServiceParams,
    ) -> Result<MemberResult, CreateMemberError> {
        params.member.validate()?;
        let member = self.directory.create_member(params.member).await?;

        Ok(MemberResult { member })
    }

    async fn update_member(
        &self,
        params: UpdateMemberServiceParams,
    ) -> Result<MemberResult, UpdateMemberError> {
        let draft_id = params.draft.member_id()?;
        if draft_id != params.member_id {
            return Err(UpdateMemberError::IdMismatch {
                path: params.member_id,
                draft: draft_id,
            });
        }

        let update = params.draft.changes();
        if update.is_empty() {
            return Err(UpdateMemberError::NoChanges);
        }

        tracing::debug!(member_id = draft_id, "updating member");
        let member = self
            .directory
            .update_member(UpdateMemberDirParams {
                member_id: draft_id,
                update,
            })
            .await?;

        Ok(MemberResult { member })
    }

    async fn delete_member(&self, params: DeleteMemberServiceParams) -> Result<(), DeleteMemberError> {
        let Some(_guard) = self.in_flight.try_claim(format!("member:{}", params.member_id)) else {
            return Err(DeleteMemberError::AlreadyInProgress(params.member_id));
        };

        self.directory.delete_member(params.member_id).await?;

        Ok(())
    }

    async fn assign_member(
        &self,
        params: MembershipServiceParams,
    ) -> Result<MembershipResult, AssignMemberError> {
        let members = self.directory.list_members().await?;
        let member = members
            .iter()
            .find(|member| member.id == Some(params.member_id))
            .ok_or(AssignMemberError::MemberNotFound(params.member_id))?;
        can_assign(member, &params.project_key)?;

        let message = self
            .directory
            .assign_member(MembershipDirParams {
                project_key: params.project_key,
                member_id: params.member_id,
            })
            .await?;

        Ok(MembershipResult { message })
    }

    async fn unassign_member(
        &self,
        params: MembershipServiceParams,
    ) -> Result<MembershipResult, AssignMemberError> {
        let members = self.directory.list_members().await?;
        let member = members
            .iter()
            .find(|member| member.id == Some(params.member_id))
            .ok_or(AssignMemberError::MemberNotFound(params.member_id))?;
        can_unassign(member, &params.project_key)?;

        let message = self
            .directory
            .unassign_member(MembershipDirParams {
                project_key: params.project_key,
                member_id: params.member_id,
            })
            .await?;

        Ok(MembershipResult { message })
    }

    async fn save_project(
        &self,
        params: SaveProjectServiceParams,
    ) -> Result<SaveProjectResult, SaveProjectError> {
        let project = params.form.validate()?;
        let project_name = project.project_name.clone();
        let message = self.directory.save_project(project).await?;

        Ok(SaveProjectResult {
            project_name,
            message,
        })
    }

    async fn end_project(
        &self,
        params: EndProjectServiceParams,
    ) -> Result<EndProjectSummary, EndProjectError> {
        let Some(_guard) = self.in_flight.try_claim(format!("project:{}", params.project_key))
        else {
            return Err(EndProjectError::AlreadyInProgress(params.project_key));
        };

        tracing::debug!(project = %params.project_key, "ending project");
        let summary = self.directory.end_project(params.project_key).await?;

        Ok(summary)
    }

    async fn submit_rating(
        &self,
        params: SubmitRatingServiceParams,
    ) -> Result<RatingSubmission, SubmitRatingError> {
        let submission = RatingSubmission::new(
            params.project,
            params.team_member,
            params.rating,
            params.feedback,
        )?;
        self.directory.submit_rating(submission.clone()).await?;

        Ok(submission)
    }

    async fn export_project(
        &self,
        params: ExportProjectServiceParams,
    ) -> Result<ProjectExport, ExportProjectError> {
        Ok(self.directory.export_project(params.project_key).await?)
    }
}
