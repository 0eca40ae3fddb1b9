use crate::domain::staffing::{ListMembersResult, MemberResult, MembershipResult, RatingSubmission};
use crate::inbound::http::responses::shared::{DataResponse, ResponseType};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

impl IntoResponse for ListMembersResult {
    fn into_response(self) -> Response {
        DataResponse::new(self.members, ResponseType::Members).into_response()
    }
}

impl IntoResponse for MemberResult {
    fn into_response(self) -> Response {
        DataResponse::new(self.member, ResponseType::Member).into_response()
    }
}

#[derive(Serialize)]
pub struct MessageData {
    message: String,
}

impl IntoResponse for MembershipResult {
    fn into_response(self) -> Response {
        let data = MessageData {
            message: self.message,
        };

        DataResponse::new(data, ResponseType::Assignment).into_response()
    }
}

impl IntoResponse for RatingSubmission {
    fn into_response(self) -> Response {
        DataResponse::new(self, ResponseType::Rating).into_response()
    }
}
