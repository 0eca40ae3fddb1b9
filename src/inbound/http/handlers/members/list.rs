use crate::core::application::ApplicationServices;
use crate::domain::staffing::{
    ListMembersError, ListMembersServiceParams, MemberFilter, StaffingService,
};
use crate::errors::{AppError, directory_error};
use axum::extract::{Query, State};
use axum::response::IntoResponse;

pub async fn list_members<S: ApplicationServices>(
    State(state): State<S>,
    Query(filter): Query<MemberFilter>,
) -> Result<impl IntoResponse, AppError> {
    let members = state
        .staffing_service()
        .list_members(ListMembersServiceParams { filter })
        .await
        .map_err(|e| match e {
            ListMembersError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{server, yaw};
    use crate::domain::staffing::{ListMembersResult, MemberStatus, MockStaffingService};
    use serde_json::Value;
    use std::future;

    #[tokio::test]
    async fn test_list_members_with_filter() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_list_members()
            .withf(|params| {
                params.filter.search.as_deref() == Some("ya")
                    && params.filter.role.as_deref() == Some("collector")
                    && params.filter.status == Some(MemberStatus::Available)
            })
            .times(1)
            .returning(|_| {
                Box::pin(future::ready(Ok(ListMembersResult {
                    members: vec![yaw()],
                })))
            });

        let response = server(staffing_service)
            .get("/api/members?search=ya&role=collector&status=available")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!("members", body["type"]);
        assert_eq!("VE4", body["data"][0]["ve_code"]);
    }
}
