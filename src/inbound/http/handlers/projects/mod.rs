mod detail;
mod end;
mod export;
mod list;
mod membership;
mod save;

pub use detail::project_detail;
pub use end::end_project;
pub use export::export_project;
pub use list::{list_active_projects, list_projects};
pub use membership::{assign_member, unassign_member};
pub use save::save_project;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::application::Application;
    use crate::core::application::tests::MockAppInstanceParameters;
    use crate::domain::staffing::{
        EmbeddedRoster, Member, MockStaffingService, Project, ProjectStatus, StaffingTargets,
    };
    use crate::inbound::http::router;
    use axum_test::TestServer;

    pub fn server(staffing_service: MockStaffingService) -> TestServer {
        let app = Application::<MockStaffingService>::mock_instance(MockAppInstanceParameters {
            config: None,
            staffing_service: Some(staffing_service),
        });

        TestServer::new(router(app)).unwrap()
    }

    pub fn survey_project() -> Project {
        Project {
            key: "Survey-2024".to_string(),
            remote_id: Some(10),
            name: "Survey-2024".to_string(),
            scrum_master: Some("Abena".to_string()),
            start_date: Some(time::macros::date!(2024 - 03 - 01)),
            end_date: None,
            duration_days: Some(45),
            status: ProjectStatus::Active,
            targets: StaffingTargets {
                collectors: 3,
                supervisors: 1,
                backcheckers: 0,
            },
            embedded: EmbeddedRoster {
                data_collectors: vec![Member {
                    name: "Ana".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        }
    }
}
