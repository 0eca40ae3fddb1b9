use crate::core::application::ApplicationServices;
use crate::domain::staffing::{StaffingService, SubmitRatingError, SubmitRatingServiceParams};
use crate::errors::{AppError, directory_error, rejected};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    project: Option<i64>,
    team_member: Option<i64>,
    rating: Option<u8>,
    feedback: Option<String>,
}

pub async fn submit_rating<S: ApplicationServices>(
    State(state): State<S>,
    Json(body): Json<SubmitRatingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let submission = state
        .staffing_service()
        .submit_rating(SubmitRatingServiceParams {
            project: body.project,
            team_member: body.team_member,
            rating: body.rating,
            feedback: body.feedback,
        })
        .await
        .map_err(|e| match e {
            SubmitRatingError::Invalid(e) => rejected(e),
            SubmitRatingError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(submission)
}
