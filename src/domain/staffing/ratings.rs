use crate::domain::staffing::{Member, ProjectRoster, Rating, RosterEntry};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

pub const MAX_RATING: u8 = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingValidationError {
    #[error("project id is not available yet")]
    ProjectNotReady,

    #[error("member has no directory id")]
    MemberWithoutId,

    #[error("a rating or feedback is required")]
    Empty,

    #[error("rating cannot be more than {}", MAX_RATING)]
    OutOfBounds,
}

/// A rating that passed validation and can be sent to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSubmission {
    pub team_member: i64,
    pub project: i64,
    pub rating: Option<u8>,
    pub feedback: String,
}

impl RatingSubmission {
    pub fn new(
        project_id: Option<i64>,
        member_id: Option<i64>,
        rating: Option<u8>,
        feedback: Option<String>,
    ) -> Result<Self, RatingValidationError> {
        let project = project_id.ok_or(RatingValidationError::ProjectNotReady)?;
        let team_member = member_id.ok_or(RatingValidationError::MemberWithoutId)?;
        let feedback = feedback.unwrap_or_default().trim().to_string();

        // the directory treats a zero rating as no rating
        let rating = rating.filter(|r| *r > 0);
        if rating.is_none() && feedback.is_empty() {
            return Err(RatingValidationError::Empty);
        }
        if rating.is_some_and(|r| r > MAX_RATING) {
            return Err(RatingValidationError::OutOfBounds);
        }

        Ok(Self {
            team_member,
            project,
            rating,
            feedback,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedMember {
    pub rating: Rating,
    pub member: Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RatingSplit {
    pub rated: Vec<RatedMember>,
    pub unrated: Vec<RosterEntry>,
}

/// Splits a project's roster into members that still need a rating and the
/// ratings already recorded for the project.
pub fn split_by_rating(
    project_id: i64,
    roster: &ProjectRoster,
    ratings: &[Rating],
    directory: &[Member],
) -> RatingSplit {
    let project_ratings: Vec<&Rating> = ratings.iter().filter(|r| r.project == project_id).collect();
    let rated_ids: HashSet<i64> = project_ratings.iter().map(|r| r.team_member).collect();

    let unrated = roster
        .all()
        .into_iter()
        .filter(|entry| entry.member.id.is_none_or(|id| !rated_ids.contains(&id)))
        .cloned()
        .collect();

    let rated = project_ratings
        .into_iter()
        .map(|rating| {
            let member = directory
                .iter()
                .find(|m| m.id == Some(rating.team_member))
                .cloned()
                .unwrap_or_else(|| Member {
                    id: Some(rating.team_member),
                    name: "Unknown Member".to_string(),
                    ..Default::default()
                });
            RatedMember {
                rating: rating.clone(),
                member,
            }
        })
        .collect();

    RatingSplit { rated, unrated }
}
