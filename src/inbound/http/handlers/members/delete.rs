use crate::core::application::ApplicationServices;
use crate::domain::staffing::{DeleteMemberError, DeleteMemberServiceParams, StaffingService};
use crate::errors::{AppError, confirmation_required, conflict, directory_error};
use crate::inbound::http::handlers::ConfirmQuery;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use http::StatusCode;

pub async fn delete_member<S: ApplicationServices>(
    State(state): State<S>,
    Path(member_id): Path<i64>,
    Query(query): Query<ConfirmQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !query.confirm {
        return Err(confirmation_required());
    }

    state
        .staffing_service()
        .delete_member(DeleteMemberServiceParams { member_id })
        .await
        .map_err(|e| match e {
            DeleteMemberError::AlreadyInProgress(_) => conflict(e),
            DeleteMemberError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::server;
    use crate::domain::staffing::{DeleteMemberError, MockStaffingService};
    use std::future;

    #[tokio::test]
    async fn test_delete_member() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_delete_member()
            .withf(|params| params.member_id == 4)
            .times(1)
            .returning(|_| Box::pin(future::ready(Ok(()))));

        let response = server(staffing_service)
            .delete("/api/members/4?confirm=true")
            .await;

        response.assert_status(http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_member_requires_confirmation() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service.expect_delete_member().never();

        let response = server(staffing_service)
            .delete("/api/members/4?confirm=false")
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_delete_member_in_progress() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_delete_member()
            .times(1)
            .returning(|params| {
                Box::pin(future::ready(Err(DeleteMemberError::AlreadyInProgress(
                    params.member_id,
                ))))
            });

        let response = server(staffing_service)
            .delete("/api/members/4?confirm=true")
            .await;

        response.assert_status(http::StatusCode::CONFLICT);
    }
}
