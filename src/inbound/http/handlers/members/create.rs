use crate::core::application::ApplicationServices;
use crate::domain::staffing::{
    CreateMemberError, CreateMemberServiceParams, NewMember, StaffingService,
};
use crate::errors::{AppError, directory_error, rejected};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use http::StatusCode;

pub async fn create_member<S: ApplicationServices>(
    State(state): State<S>,
    Json(member): Json<NewMember>,
) -> Result<impl IntoResponse, AppError> {
    let created = state
        .staffing_service()
        .create_member(CreateMemberServiceParams { member })
        .await
        .map_err(|e| match e {
            CreateMemberError::Invalid(e) => rejected(e),
            CreateMemberError::DirectoryError(e) => directory_error(e),
        })?;

    Ok((StatusCode::CREATED, created))
}
