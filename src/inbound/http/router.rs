use crate::core::application::{Application, ApplicationServices};
use crate::domain::staffing::StaffingService;
use crate::inbound::http::handlers::{
    assign_member, create_member, dashboard_summary, delete_member, end_project, export_project,
    list_active_projects, list_members, list_projects, project_detail, save_project,
    server_health, submit_rating, unassign_member, update_member,
};
use axum::Router;
use axum::extract::{MatchedPath, Request};
use axum::routing::{get, patch, post};
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use http::{HeaderValue, Method, StatusCode};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn router<STAFFING: StaffingService + Send + Sync + 'static>(
    application: Application<STAFFING>,
) -> Router {
    let config = application.config();

    let hosts: Vec<HeaderValue> = config
        .cors_hosts
        .iter()
        .filter_map(|host| match host.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(host = %host, "ignoring invalid cors host");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, ACCEPT, CONTENT_TYPE])
        .allow_origin(hosts);

    Router::new()
        .route("/healthz", get(server_health))
        .nest("/api", api_routes())
        .layer(cors)
        .layer((
            CompressionLayer::new(),
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::debug_span!("request", %method, %uri, matched_path)
                })
                .on_failure(()),
            TimeoutLayer::with_status_code(
                StatusCode::GATEWAY_TIMEOUT,
                std::time::Duration::from_secs(30),
            ),
            CatchPanicLayer::new(),
        ))
        .with_state(application)
}

fn api_routes<APP>() -> Router<APP>
where
    APP: ApplicationServices + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(dashboard_summary::<APP>))
        .route("/ratings", post(submit_rating::<APP>))
        .route(
            "/projects",
            get(list_projects::<APP>).post(save_project::<APP>),
        )
        .route("/projects/active", get(list_active_projects::<APP>))
        .route("/projects/{key}", get(project_detail::<APP>))
        .route("/projects/{key}/end", post(end_project::<APP>))
        .route("/projects/{key}/export", get(export_project::<APP>))
        .route(
            "/projects/{key}/members/{id}",
            post(assign_member::<APP>).delete(unassign_member::<APP>),
        )
        .route(
            "/members",
            get(list_members::<APP>).post(create_member::<APP>),
        )
        .route(
            "/members/{id}",
            patch(update_member::<APP>).delete(delete_member::<APP>),
        )
}
