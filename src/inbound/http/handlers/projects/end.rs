use crate::core::application::ApplicationServices;
use crate::domain::staffing::{EndProjectError, EndProjectServiceParams, StaffingService};
use crate::errors::{AppError, confirmation_required, conflict, directory_error};
use crate::inbound::http::handlers::ConfirmQuery;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

pub async fn end_project<S: ApplicationServices>(
    State(state): State<S>,
    Path(project_key): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !query.confirm {
        return Err(confirmation_required());
    }

    let summary = state
        .staffing_service()
        .end_project(EndProjectServiceParams { project_key })
        .await
        .map_err(|e| match e {
            EndProjectError::AlreadyInProgress(_) => conflict(e),
            EndProjectError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(summary)
}
