use crate::domain::staffing::{Member, MemberStatus, Project, Role, RoleCounts, StaffingTargets};
use serde::Serialize;
use std::collections::BTreeMap;

/// Share of needed head count that is assigned, rounded and capped at 100.
/// Zero needed yields zero.
pub fn staffed_percent(needed: &StaffingTargets, assigned: &RoleCounts) -> u8 {
    let needed = needed.total();
    if needed == 0 {
        return 0;
    }

    let percent = (100.0 * assigned.total() as f64 / needed as f64).round();
    percent.min(100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub member_id: Option<i64>,
    pub name: String,
    pub ve_code: Option<String>,
    pub assigned_projects: Vec<String>,
    pub current_project: Option<String>,
}

pub fn is_anomalous(member: &Member) -> bool {
    member.status == MemberStatus::Available
        && (!member.assigned_projects.is_empty()
            || member.current_project.is_some()
            || member.assigned_projects_count > 0)
}

/// Members flagged available while still carrying an assignment.
pub fn find_anomalies(members: &[Member]) -> Vec<Anomaly> {
    members
        .iter()
        .filter(|member| is_anomalous(member))
        .map(|member| Anomaly {
            member_id: member.id,
            name: member.name.clone(),
            ve_code: member.ve_code.clone(),
            assigned_projects: member.assigned_projects.clone(),
            current_project: member.current_project.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct RoleBreakdown {
    pub total: u32,
    pub ready: u32,
    pub deployed: u32,
    pub average_performance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StaffingNeeds {
    pub needed: StaffingTargets,
    pub assigned: RoleCounts,
    pub gap: StaffingTargets,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DashboardSummary {
    pub total_members: u32,
    pub deployed: u32,
    pub bench: u32,
    pub utilization_percent: u8,
    pub average_performance: Option<f64>,
    pub data_collectors: RoleBreakdown,
    pub supervisors: RoleBreakdown,
    pub backcheckers: RoleBreakdown,
    pub active_project_count: u32,
    pub projects_by_status: BTreeMap<String, u32>,
    pub needs: StaffingNeeds,
    pub anomalies: Vec<Anomaly>,
}

fn average(scores: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = scores
        .flatten()
        .filter(|score| score.is_finite())
        .fold((0.0, 0u32), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

fn breakdown(members: &[Member], role: Role) -> RoleBreakdown {
    let in_role: Vec<&Member> = members.iter().filter(|m| role.matches(&m.role)).collect();

    RoleBreakdown {
        total: in_role.len() as u32,
        ready: in_role
            .iter()
            .filter(|m| m.status == MemberStatus::Available)
            .count() as u32,
        deployed: in_role
            .iter()
            .filter(|m| m.status == MemberStatus::Deployed)
            .count() as u32,
        average_performance: average(in_role.iter().map(|m| m.performance_score)),
    }
}

/// Roster-wide and active-project staffing figures for the overview.
pub fn dashboard_summary(members: &[Member], projects: &[Project]) -> DashboardSummary {
    let total_members = members.len() as u32;
    let deployed = members
        .iter()
        .filter(|m| m.status == MemberStatus::Deployed)
        .count() as u32;
    let utilization_percent = if total_members == 0 {
        0
    } else {
        (100.0 * f64::from(deployed) / f64::from(total_members)).round() as u8
    };

    let mut projects_by_status = BTreeMap::new();
    let mut needed = StaffingTargets::default();
    let mut assigned = RoleCounts::default();
    let mut active_project_count = 0;
    for project in projects {
        *projects_by_status
            .entry(project.status.as_str().to_string())
            .or_insert(0) += 1;

        if project.status.is_active() {
            active_project_count += 1;
            needed.collectors = needed.collectors.saturating_add(project.targets.collectors);
            needed.supervisors = needed.supervisors.saturating_add(project.targets.supervisors);
            needed.backcheckers = needed
                .backcheckers
                .saturating_add(project.targets.backcheckers);

            let counts = RoleCounts::from(&project.embedded);
            assigned.collectors = assigned.collectors.saturating_add(counts.collectors);
            assigned.supervisors = assigned.supervisors.saturating_add(counts.supervisors);
            assigned.backcheckers = assigned.backcheckers.saturating_add(counts.backcheckers);
        }
    }

    let gap = StaffingTargets {
        collectors: needed.collectors.saturating_sub(assigned.collectors),
        supervisors: needed.supervisors.saturating_sub(assigned.supervisors),
        backcheckers: needed.backcheckers.saturating_sub(assigned.backcheckers),
    };

    DashboardSummary {
        total_members,
        deployed,
        bench: total_members - deployed,
        utilization_percent,
        average_performance: average(members.iter().map(|m| m.performance_score)),
        data_collectors: breakdown(members, Role::DataCollector),
        supervisors: breakdown(members, Role::Supervisor),
        backcheckers: breakdown(members, Role::Backchecker),
        active_project_count,
        projects_by_status,
        needs: StaffingNeeds {
            needed,
            assigned,
            gap,
        },
        anomalies: find_anomalies(members),
    }
}
