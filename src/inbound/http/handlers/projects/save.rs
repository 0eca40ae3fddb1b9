use crate::core::application::ApplicationServices;
use crate::domain::staffing::{
    ProjectForm, SaveProjectError, SaveProjectServiceParams, StaffingService,
};
use crate::errors::{AppError, directory_error, rejected};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn save_project<S: ApplicationServices>(
    State(state): State<S>,
    Json(form): Json<ProjectForm>,
) -> Result<impl IntoResponse, AppError> {
    let saved = state
        .staffing_service()
        .save_project(SaveProjectServiceParams { form })
        .await
        .map_err(|e| match e {
            SaveProjectError::Invalid(e) => rejected(e),
            SaveProjectError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(saved)
}
