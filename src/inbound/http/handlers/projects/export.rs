use crate::core::application::ApplicationServices;
use crate::domain::staffing::{ExportProjectError, ExportProjectServiceParams, StaffingService};
use crate::errors::{AppError, directory_error};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn export_project<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let export = state
        .staffing_service()
        .export_project(ExportProjectServiceParams { project_key })
        .await
        .map_err(|e| match e {
            ExportProjectError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::server;
    use crate::domain::staffing::{MockStaffingService, ProjectExport};
    use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
    use std::future;

    #[tokio::test]
    async fn test_export_project() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_export_project()
            .times(1)
            .returning(|params| {
                Box::pin(future::ready(Ok(ProjectExport::new(
                    &params.project_key,
                    "text/csv",
                    b"name,ve_code\nAna,VE1\n".to_vec(),
                ))))
            });

        let response = server(staffing_service)
            .get("/api/projects/Survey-2024/export")
            .await;

        response.assert_status_ok();
        assert_eq!("text/csv", response.header(CONTENT_TYPE));
        assert_eq!(
            "attachment; filename=\"Survey-2024_members.csv\"",
            response.header(CONTENT_DISPOSITION)
        );
        assert_eq!("name,ve_code\nAna,VE1\n", response.text());
    }

    #[tokio::test]
    async fn test_export_project_with_unsafe_key() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_export_project()
            .withf(|params| params.project_key == "Bad\nKey\u{e9}\"")
            .times(1)
            .returning(|params| {
                Box::pin(future::ready(Ok(ProjectExport::new(
                    &params.project_key,
                    "text/csv",
                    Vec::new(),
                ))))
            });

        let response = server(staffing_service)
            .get("/api/projects/Bad%0AKey%C3%A9%22/export")
            .await;

        response.assert_status_ok();
        assert_eq!(
            "attachment; filename=\"Bad_Key___members.csv\"",
            response.header(CONTENT_DISPOSITION)
        );
    }
}
