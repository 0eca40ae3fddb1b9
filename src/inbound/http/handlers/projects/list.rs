use crate::core::application::ApplicationServices;
use crate::domain::staffing::{GetActiveProjectsError, GetAllProjectsError, StaffingService};
use crate::errors::{AppError, directory_error};
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn list_active_projects<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let projects = state
        .staffing_service()
        .active_projects()
        .await
        .map_err(|e| match e {
            GetActiveProjectsError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(projects)
}

pub async fn list_projects<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let projects = state
        .staffing_service()
        .all_projects()
        .await
        .map_err(|e| match e {
            GetAllProjectsError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(projects)
}
