use crate::core::application::ApplicationServices;
use crate::domain::staffing::{GetDashboardError, StaffingService};
use crate::errors::{AppError, directory_error};
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn dashboard_summary<S: ApplicationServices>(
    State(state): State<S>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state
        .staffing_service()
        .dashboard_summary()
        .await
        .map_err(|e| match e {
            GetDashboardError::DirectoryError(e) => directory_error(e),
        })?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::staffing::{
        DashboardSummary, GetDashboardError, GetDashboardResult, MockStaffingService,
    };
    use crate::inbound::http::router;
    use crate::outbound::directory::error::Error as DirectoryError;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::future;

    fn server(staffing_service: MockStaffingService) -> TestServer {
        let app = Application::<MockStaffingService>::mock_instance(MockAppInstanceParameters {
            config: None,
            staffing_service: Some(staffing_service),
        });

        TestServer::new(router(app)).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_summary() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_dashboard_summary()
            .times(1)
            .returning(|| {
                Box::pin(future::ready(Ok(GetDashboardResult {
                    summary: DashboardSummary {
                        total_members: 4,
                        deployed: 3,
                        bench: 1,
                        utilization_percent: 75,
                        ..Default::default()
                    },
                })))
            });

        let response = server(staffing_service).get("/api/dashboard").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!("dashboard", body["type"]);
        assert_eq!(75, body["data"]["utilization_percent"]);
    }

    #[tokio::test]
    async fn test_dashboard_summary_upstream_failure() {
        let mut staffing_service = MockStaffingService::new();
        staffing_service
            .expect_dashboard_summary()
            .times(1)
            .returning(|| {
                Box::pin(future::ready(Err(GetDashboardError::DirectoryError(
                    DirectoryError::Status {
                        status: 500,
                        message: Some("database unavailable".to_string()),
                    },
                ))))
            });

        let response = server(staffing_service).get("/api/dashboard").await;

        response.assert_status(http::StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!("database unavailable", body["message"]);
    }
}
