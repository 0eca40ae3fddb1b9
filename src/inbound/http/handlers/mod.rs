mod dashboard;
mod members;
mod projects;
mod ratings;
mod server;

pub use dashboard::dashboard_summary;
pub use members::{create_member, delete_member, list_members, update_member};
pub use projects::{
    assign_member, end_project, export_project, list_active_projects, list_projects,
    project_detail, save_project, unassign_member,
};
pub use ratings::submit_rating;
pub use server::server_health;

use serde::Deserialize;

/// `?confirm=true`, required by destructive endpoints.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfirmQuery {
    pub confirm: bool,
}
