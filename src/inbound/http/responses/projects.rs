use crate::domain::staffing::{
    EndProjectSummary, GetActiveProjectsResult, GetAllProjectsResult, GetProjectDetailResult,
    ProjectExport, ProjectListing, ProjectOverview, RatingSplit, SaveProjectResult,
};
use crate::inbound::http::responses::shared::{DataResponse, ResponseType};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::Serialize;

impl IntoResponse for GetActiveProjectsResult {
    fn into_response(self) -> Response {
        DataResponse::new(self.projects, ResponseType::Projects).into_response()
    }
}

//------------------------------------------------------------------------------
// All Projects
//------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct AllProjectsData {
    active: Vec<ProjectListing>,
    completed: Option<Vec<ProjectListing>>,
}

impl IntoResponse for GetAllProjectsResult {
    fn into_response(self) -> Response {
        let data = AllProjectsData {
            active: self.active,
            completed: self.completed,
        };

        DataResponse::new(data, ResponseType::Projects).into_response()
    }
}

//------------------------------------------------------------------------------
// Project Detail
//------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectDetailData {
    #[serde(flatten)]
    overview: ProjectOverview,
    ratings: RatingSplit,
}

impl IntoResponse for GetProjectDetailResult {
    fn into_response(self) -> Response {
        let data = ProjectDetailData {
            overview: self.overview,
            ratings: self.ratings,
        };

        DataResponse::new(data, ResponseType::Project).into_response()
    }
}

//------------------------------------------------------------------------------
// Save / End / Export
//------------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SavedProjectData {
    project_name: String,
    message: String,
}

impl IntoResponse for SaveProjectResult {
    fn into_response(self) -> Response {
        let data = SavedProjectData {
            project_name: self.project_name,
            message: self.message,
        };

        DataResponse::new(data, ResponseType::Project).into_response()
    }
}

impl IntoResponse for EndProjectSummary {
    fn into_response(self) -> Response {
        DataResponse::new(self, ResponseType::ProjectEnd).into_response()
    }
}

// Header values only take visible ASCII; anything else in a project key
// becomes `_`.
fn attachment_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}

impl IntoResponse for ProjectExport {
    fn into_response(self) -> Response {
        let disposition = format!(
            "attachment; filename=\"{}\"",
            attachment_name(&self.file_name)
        );

        (
            StatusCode::OK,
            [(CONTENT_TYPE, self.content_type), (CONTENT_DISPOSITION, disposition)],
            self.bytes,
        )
            .into_response()
    }
}
