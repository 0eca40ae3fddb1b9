use crate::core::application::ApplicationServices;
use crate::domain::staffing::{AssignMemberError, MembershipServiceParams, StaffingService};
use crate::errors::{AppError, directory_error, not_found, rejected};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

fn membership_error(e: AssignMemberError) -> AppError {
    match e {
        AssignMemberError::MemberNotFound(_) => not_found(e),
        AssignMemberError::Rejected(e) => rejected(e),
        AssignMemberError::DirectoryError(e) => directory_error(e),
    }
}

pub async fn assign_member<S: ApplicationServices>(
    State(state): State<S>,
    Path((project_key, member_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .staffing_service()
        .assign_member(MembershipServiceParams {
            project_key,
            member_id,
        })
        .await
        .map_err(membership_error)?;

    Ok(result)
}

pub async fn unassign_member<S: ApplicationServices>(
    State(state): State<S>,
    Path((project_key, member_id)): Path<(String, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .staffing_service()
        .unassign_member(MembershipServiceParams {
            project_key,
            member_id,
        })
        .await
        .map_err(membership_error)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::server;
    use crate::domain::staffing::{
        AssignMemberError, AssignmentRejected, MembershipResult, MockStaffingService,
    };
    use serde_json::Value;
    use std::future;

    #[tokio::test]
    async fn test_assign_member() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_assign_member()
            .withf(|params| params.project_key == "Survey-2024" && params.member_id == 4)
            .times(1)
            .returning(|_| {
                Box::pin(future::ready(Ok(MembershipResult {
                    message: "Yaw assigned to Survey-2024".to_string(),
                })))
            });

        let response = server(staffing_service)
            .post("/api/projects/Survey-2024/members/4")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!("assignment", body["type"]);
        assert_eq!("Yaw assigned to Survey-2024", body["data"]["message"]);
    }

    #[tokio::test]
    async fn test_assign_member_rejected() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_assign_member()
            .times(1)
            .returning(|_| {
                Box::pin(future::ready(Err(AssignMemberError::Rejected(
                    AssignmentRejected::NotAvailable,
                ))))
            });

        let response = server(staffing_service)
            .post("/api/projects/Survey-2024/members/1")
            .await;

        response.assert_status(http::StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!("member is not available to assign", body["message"]);
    }

    #[tokio::test]
    async fn test_unassign_unknown_member() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_unassign_member()
            .times(1)
            .returning(|params| {
                Box::pin(future::ready(Err(AssignMemberError::MemberNotFound(
                    params.member_id,
                ))))
            });

        let response = server(staffing_service)
            .delete("/api/projects/Survey-2024/members/99")
            .await;

        response.assert_status_not_found();
    }
}
