use crate::core::application::ApplicationServices;
use crate::domain::staffing::{GetProjectDetailError, ProjectDetailServiceParams, StaffingService};
use crate::errors::{AppError, directory_error, not_found};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn project_detail<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = state
        .staffing_service()
        .project_detail(ProjectDetailServiceParams { project_key })
        .await
        .map_err(|e| match e {
            GetProjectDetailError::NotFound(_) => not_found(e),
            GetProjectDetailError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{server, survey_project};
    use crate::domain::staffing::{
        GetProjectDetailError, GetProjectDetailResult, MockStaffingService, ProjectOverview,
        RatingSplit, reconcile,
    };
    use serde_json::Value;
    use std::future;

    #[tokio::test]
    async fn test_project_detail() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_project_detail()
            .withf(|params| params.project_key == "Survey 2024")
            .times(1)
            .returning(|_| {
                let project = survey_project();
                let roster = reconcile(&project.key, &project.embedded, &[]);
                let unrated = roster.all().into_iter().cloned().collect();
                Box::pin(future::ready(Ok(GetProjectDetailResult {
                    overview: ProjectOverview {
                        project,
                        roster,
                        staffed_percent: 25,
                    },
                    ratings: RatingSplit {
                        rated: vec![],
                        unrated,
                    },
                })))
            });

        let response = server(staffing_service).get("/api/projects/Survey%202024").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!("project", body["type"]);
        assert_eq!(25, body["data"]["staffed_percent"]);
        assert_eq!("Ana", body["data"]["ratings"]["unrated"][0]["name"]);
    }

    #[tokio::test]
    async fn test_project_detail_not_found() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_project_detail()
            .times(1)
            .returning(|params| {
                Box::pin(future::ready(Err(GetProjectDetailError::NotFound(
                    params.project_key,
                ))))
            });

        let response = server(staffing_service).get("/api/projects/Nope").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!("project \"Nope\" is not an active project", body["message"]);
    }
}
