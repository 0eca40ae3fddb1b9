use crate::outbound::directory::error::Error as DirectoryError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct AppErrorResponse {
    code: u16,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("internal server error")]
    InternalServerError,

    #[error("bad request")]
    BadRequest(Option<String>),

    #[error("request path not found")]
    NotFound(Option<String>),

    #[error("request is already in progress")]
    Conflict(Option<String>),

    #[error("request was rejected")]
    Rejected(Option<String>),

    #[error("directory request failed")]
    BadGateway(Option<String>),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Option<String> {
        match self {
            Self::InternalServerError => None,
            Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Rejected(message)
            | Self::BadGateway(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        (
            status_code,
            Json(AppErrorResponse {
                code: status_code.as_u16(),
                status: self.to_string(),
                message: self.message(),
            }),
        )
            .into_response()
    }
}

pub fn bad_request(message: impl Into<String>) -> AppError {
    AppError::BadRequest(Some(message.into()))
}

pub fn rejected<E: ToString>(err: E) -> AppError {
    AppError::Rejected(Some(err.to_string()))
}

pub fn conflict<E: ToString>(err: E) -> AppError {
    AppError::Conflict(Some(err.to_string()))
}

pub fn not_found<E: ToString>(err: E) -> AppError {
    AppError::NotFound(Some(err.to_string()))
}

/// Surfaces the directory's own message when it gave one.
pub fn directory_error(err: DirectoryError) -> AppError {
    tracing::error!("{:?}", err);
    let message = err
        .upstream_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());

    AppError::BadGateway(Some(message))
}

pub fn confirmation_required() -> AppError {
    bad_request("destructive action requires confirm=true")
}
