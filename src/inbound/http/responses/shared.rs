use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

#[derive(Serialize, Clone, Copy)]
pub enum ResponseType {
    #[serde(rename = "health")]
    Health,

    #[serde(rename = "dashboard")]
    Dashboard,

    #[serde(rename = "projects")]
    Projects,

    #[serde(rename = "project")]
    Project,

    #[serde(rename = "members")]
    Members,

    #[serde(rename = "member")]
    Member,

    #[serde(rename = "assignment")]
    Assignment,

    #[serde(rename = "project_end")]
    ProjectEnd,

    #[serde(rename = "rating")]
    Rating,
}

#[derive(Serialize)]
pub struct DataResponse<T: Serialize> {
    data: T,
    #[serde(rename = "type")]
    object_type: ResponseType,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T, object_type: ResponseType) -> Self {
        Self { data, object_type }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
