use crate::core::application::ApplicationServices;
use crate::domain::staffing::{
    MemberDraft, StaffingService, UpdateMemberError, UpdateMemberServiceParams,
};
use crate::errors::{AppError, directory_error, rejected};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn update_member<S: ApplicationServices>(
    State(state): State<S>,
    Path(member_id): Path<i64>,
    Json(draft): Json<MemberDraft>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .staffing_service()
        .update_member(UpdateMemberServiceParams { member_id, draft })
        .await
        .map_err(|e| match e {
            UpdateMemberError::Invalid(_)
            | UpdateMemberError::IdMismatch { .. }
            | UpdateMemberError::NoChanges => rejected(e),
            UpdateMemberError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(updated)
}
