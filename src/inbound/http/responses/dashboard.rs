use crate::domain::staffing::GetDashboardResult;
use crate::inbound::http::responses::shared::{DataResponse, ResponseType};
use axum::response::{IntoResponse, Response};

impl IntoResponse for GetDashboardResult {
    fn into_response(self) -> Response {
        DataResponse::new(self.summary, ResponseType::Dashboard).into_response()
    }
}
