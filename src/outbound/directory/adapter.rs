use crate::domain::staffing::{
    DirectoryPort, EndProjectSummary, Member, MembershipDirParams, NewMember, Project,
    ProjectExport, ProjectTargets, Rating, RatingSubmission, UpdateMemberDirParams,
};
use crate::outbound::directory::error::Error;
use crate::outbound::directory::models::{
    ActiveProjectsResponse, AllProjectsResponse, EndProjectResponse, ErrorBody, MemberEnvelope,
    MemberList, MessageResponse, ProjectNameRequest, RatingRecord, SaveProjectRequest,
};
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

const MEMBERS_PATH: &str = "col/teammembers/";
const ACTIVE_PROJECTS_PATH: &str = "col/get-project/";
const ALL_PROJECTS_PATH: &str = "col/projects/";
const RATINGS_PATH: &str = "col/rating/";
const ASSIGN_MEMBER_PATH: &str = "col/assign-member/";
const UNASSIGN_MEMBER_PATH: &str = "col/unassign-member/";
const SAVE_PROJECT_PATH: &str = "col/assign-project/";
const END_PROJECT_PATH: &str = "col/end-project/";
const EXPORT_PROJECT_PATH: &str = "col/projects/export/";

#[derive(Debug, Clone)]
pub struct DirectoryAdapter {
    http_client: reqwest::Client,
    base_url: Url,
}

pub struct NewDirectoryAdapterParams {
    pub base_url: String,
}

impl DirectoryAdapter {
    pub fn new(params: NewDirectoryAdapterParams) -> Result<Self, Error> {
        let mut base_url = Url::parse(params.base_url.trim())?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        tracing::debug!(base_url = %base_url, "creating directory adapter");

        let http_client = reqwest::ClientBuilder::new().build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .or_else(|| status.canonical_reason().map(str::to_string));
        tracing::error!(status = status.as_u16(), ?message, "directory request failed");

        Err(Error::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let body = self.send(request).await?.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Like `json`, but an empty body decodes as the default value.
    async fn json_or_default<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, Error> {
        let body = self.send(request).await?.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn change_membership(
        &self,
        path: &str,
        params: MembershipDirParams,
        fallback: &str,
    ) -> Result<String, Error> {
        let request = self.http_client.post(self.url(path)?).json(&params);
        let response: MessageResponse = self.json_or_default(request).await?;

        Ok(response.message.unwrap_or_else(|| fallback.to_string()))
    }
}

#[async_trait]
impl DirectoryPort for DirectoryAdapter {
    async fn list_members(&self) -> Result<Vec<Member>, Error> {
        let request = self.http_client.get(self.url(MEMBERS_PATH)?);
        let members: MemberList = self.json(request).await?;

        Ok(members.into())
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, Error> {
        let request = self.http_client.get(self.url(ACTIVE_PROJECTS_PATH)?);
        let projects: ActiveProjectsResponse = self.json(request).await?;

        Ok(projects.into())
    }

    async fn list_all_projects(&self) -> Result<Vec<Project>, Error> {
        let request = self.http_client.get(self.url(ALL_PROJECTS_PATH)?);
        let projects: AllProjectsResponse = self.json(request).await?;

        Ok(projects.into())
    }

    async fn list_ratings(&self) -> Result<Vec<Rating>, Error> {
        let request = self.http_client.get(self.url(RATINGS_PATH)?);
        let ratings: Vec<RatingRecord> = self.json(request).await?;

        Ok(ratings
            .into_iter()
            .filter_map(RatingRecord::into_rating)
            .collect())
    }

    async fn create_member(&self, member: NewMember) -> Result<Member, Error> {
        let request = self.http_client.post(self.url(MEMBERS_PATH)?).json(&member);
        let created: MemberEnvelope = self.json(request).await?;

        Ok(created.into())
    }

    async fn update_member(&self, params: UpdateMemberDirParams) -> Result<Member, Error> {
        let url = self.url(&format!("{MEMBERS_PATH}{}/", params.member_id))?;
        let request = self.http_client.patch(url).json(&params.update);
        let updated: MemberEnvelope = self.json(request).await?;

        Ok(updated.into())
    }

    async fn delete_member(&self, member_id: i64) -> Result<(), Error> {
        let url = self.url(&format!("{MEMBERS_PATH}{member_id}/"))?;
        self.send(self.http_client.delete(url)).await?;

        Ok(())
    }

    async fn assign_member(&self, params: MembershipDirParams) -> Result<String, Error> {
        self.change_membership(ASSIGN_MEMBER_PATH, params, "Member assigned")
            .await
    }

    async fn unassign_member(&self, params: MembershipDirParams) -> Result<String, Error> {
        self.change_membership(UNASSIGN_MEMBER_PATH, params, "Member unassigned")
            .await
    }

    async fn save_project(&self, project: ProjectTargets) -> Result<String, Error> {
        let body = SaveProjectRequest::from(project);
        let request = self.http_client.post(self.url(SAVE_PROJECT_PATH)?).json(&body);
        let response: MessageResponse = self.json_or_default(request).await?;

        Ok(response
            .message
            .unwrap_or_else(|| "Project saved".to_string()))
    }

    async fn end_project(&self, project_key: String) -> Result<EndProjectSummary, Error> {
        let request = self
            .http_client
            .post(self.url(END_PROJECT_PATH)?)
            .json(&ProjectNameRequest {
                project_name: &project_key,
            });
        let response: EndProjectResponse = self.json_or_default(request).await?;

        Ok(response.into())
    }

    async fn submit_rating(&self, submission: RatingSubmission) -> Result<(), Error> {
        let request = self.http_client.post(self.url(RATINGS_PATH)?).json(&submission);
        self.send(request).await?;

        Ok(())
    }

    async fn export_project(&self, project_key: String) -> Result<ProjectExport, Error> {
        let request = self
            .http_client
            .get(self.url(EXPORT_PROJECT_PATH)?)
            .query(&[("project_name", project_key.as_str())]);
        let response = self.send(request).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("text/csv")
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(ProjectExport::new(&project_key, content_type, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staffing::{MemberStatus, MemberUpdate};
    use axum::extract::{Path, Query};
    use axum::routing::{get, patch, post};
    use axum::{Json, Router};
    use http::StatusCode;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn fake_directory(router: Router) -> DirectoryAdapter {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        DirectoryAdapter::new(NewDirectoryAdapterParams {
            base_url: format!("http://{address}"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_members_and_projects() {
        let router = Router::new()
            .route(
                "/col/teammembers/",
                get(|| async {
                    Json(json!({ "data": [{ "id": 1, "name": "Ana", "status": "available" }] }))
                }),
            )
            .route(
                "/col/get-project/",
                get(|| async {
                    Json(json!({
                        "active_projects": {
                            "Survey-2024": {
                                "project_info": { "id": 10, "status": "active", "collectors_needed": 3 },
                                "data_collectors": [{ "name": "Ana" }],
                                "supervisors": null,
                            }
                        }
                    }))
                }),
            );
        let adapter = fake_directory(router).await;

        let members = adapter.list_members().await.unwrap();
        let projects = adapter.list_active_projects().await.unwrap();

        assert_eq!(MemberStatus::Available, members[0].status);
        assert_eq!("Survey-2024", projects[0].key);
        assert_eq!(3, projects[0].targets.collectors);
        assert!(projects[0].embedded.supervisors.is_empty());
    }

    #[tokio::test]
    async fn test_error_message_from_body() {
        let router = Router::new().route(
            "/col/assign-member/",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "detail": "Member already assigned" })),
                )
            }),
        );
        let adapter = fake_directory(router).await;

        let result = adapter
            .assign_member(MembershipDirParams {
                project_key: "Survey-2024".to_string(),
                member_id: 1,
            })
            .await;

        match result {
            Err(Error::Status { status, message }) => {
                assert_eq!(400, status);
                assert_eq!(Some("Member already assigned".to_string()), message);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_message_falls_back_to_status_text() {
        let router = Router::new().route(
            "/col/rating/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let adapter = fake_directory(router).await;

        let error = adapter.list_ratings().await.unwrap_err();

        assert_eq!(Some("Service Unavailable"), error.upstream_message());
    }

    #[tokio::test]
    async fn test_assign_sends_project_name() {
        let router = Router::new().route(
            "/col/assign-member/",
            post(|Json(body): Json<Value>| async move {
                let message = format!(
                    "{} joined {}",
                    body["member_id"], body["project_name"].as_str().unwrap_or_default()
                );
                Json(json!({ "message": message }))
            }),
        );
        let adapter = fake_directory(router).await;

        let message = adapter
            .assign_member(MembershipDirParams {
                project_key: "Survey-2024".to_string(),
                member_id: 4,
            })
            .await
            .unwrap();

        assert_eq!("4 joined Survey-2024", message);
    }

    #[tokio::test]
    async fn test_update_member_patches_changes_only() {
        let router = Router::new().route(
            "/col/teammembers/{id}/",
            patch(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                assert_eq!(json!({ "status": "inactive" }), body);
                Json(json!({ "id": id, "name": "Yaw", "status": "inactive" }))
            }),
        );
        let adapter = fake_directory(router).await;

        let member = adapter
            .update_member(UpdateMemberDirParams {
                member_id: 4,
                update: MemberUpdate {
                    status: Some(MemberStatus::Inactive),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(Some(4), member.id);
        assert_eq!(MemberStatus::Inactive, member.status);
    }

    #[tokio::test]
    async fn test_end_project_summary() {
        let router = Router::new().route(
            "/col/end-project/",
            post(|| async {
                Json(json!({
                    "summary": { "total_unassigned": 3, "made_available": 2, "still_deployed": 1 },
                    "members_made_available": [
                        { "name": "Ana", "ve_code": "VE1" },
                        { "name": "Kofi" },
                    ],
                }))
            }),
        );
        let adapter = fake_directory(router).await;

        let summary = adapter.end_project("Survey-2024".to_string()).await.unwrap();

        assert_eq!(3, summary.total_unassigned);
        assert_eq!(2, summary.members_made_available.len());
        assert_eq!(None, summary.members_made_available[1].ve_code);
    }

    #[tokio::test]
    async fn test_export_project() {
        let router = Router::new().route(
            "/col/projects/export/",
            get(|Query(query): Query<HashMap<String, String>>| async move {
                assert_eq!(Some("Survey 2024"), query.get("project_name").map(String::as_str));
                (
                    [(
                        CONTENT_TYPE,
                        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                    )],
                    vec![0x50u8, 0x4b],
                )
            }),
        );
        let adapter = fake_directory(router).await;

        let export = adapter.export_project("Survey 2024".to_string()).await.unwrap();

        assert_eq!("Survey 2024_members.xlsx", export.file_name);
        assert_eq!(vec![0x50, 0x4b], export.bytes);
    }

    #[tokio::test]
    async fn test_delete_member_accepts_no_content() {
        let router = Router::new().route(
            "/col/teammembers/{id}/",
            axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
        );
        let adapter = fake_directory(router).await;

        assert!(adapter.delete_member(9).await.is_ok());
    }
}
