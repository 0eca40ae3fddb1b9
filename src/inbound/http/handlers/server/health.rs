use crate::inbound::http::responses::health::health_response;
use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;

pub async fn server_health() -> impl IntoResponse {
    let response = health_response();

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::staffing::MockStaffingService;
    use crate::inbound::http::router;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_server_health() {
        let app = Application::<MockStaffingService>::mock_instance(MockAppInstanceParameters {
            config: None,
            staffing_service: None,
        });
        let router = router(app);
        let server = TestServer::new(router).unwrap();

        let response = server.get("/healthz").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "data": { "status": "OK" }, "type": "health" }));
    }
}
