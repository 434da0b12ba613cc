//! Stepwise intake validation for project pitches and mentor applications.
//!
//! The public form collects a submission over three steps (applicant,
//! project, timeline & impact). Validation mirrors that structure so a
//! failing field can be reported with the step it belongs to, letting a
//! multi-step client return the user to the right place.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::vocab;

/// Maximum number of additional team members per submission.
pub const MAX_TEAM_MEMBERS: usize = 3;

/* --------------------------------------------------------------------------
Payload types
-------------------------------------------------------------------------- */

/// One additional team member on a project pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Incoming project pitch payload, prior to validation and storage.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubmission {
    // Step 1: applicant.
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_number: String,
    pub branch: String,
    pub year: String,

    // Step 2: project.
    pub title: String,
    pub description: String,
    pub primary_sdg: String,
    #[serde(default)]
    pub secondary_sdgs: Vec<String>,
    #[serde(default)]
    pub sdg_track: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,

    // Step 3: timeline & impact.
    pub timeline: String,
    pub expected_impact: String,
}

/// Incoming mentor application payload.
///
/// Only name, email, year, and branch are required; the rest is optional
/// background the applicant may volunteer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMentorApplication {
    pub name: String,
    pub email: String,
    pub year: String,
    pub branch: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub previous_experience: Option<String>,
    #[serde(default)]
    pub availability_per_week: Option<String>,
}

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Require a non-empty (after trimming) field, naming the step it sits in.
fn require(step: u8, field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!(
            "Step {step}: {field} is required"
        )))
    } else {
        Ok(())
    }
}

/// Validate one step of a submission in isolation.
///
/// Steps are numbered 1 (applicant), 2 (project), 3 (timeline & impact),
/// matching the public form. Unknown step numbers are a validation error.
pub fn validate_step(submission: &NewSubmission, step: u8) -> Result<(), CoreError> {
    match step {
        1 => {
            require(1, "name", &submission.name)?;
            require(1, "email", &submission.email)?;
            require(1, "phone", &submission.phone)?;
            require(1, "registration number", &submission.registration_number)?;
            require(1, "branch", &submission.branch)?;
            require(1, "year", &submission.year)?;
            vocab::validate_branch(&submission.branch)?;
            vocab::validate_year(&submission.year)?;
            Ok(())
        }
        2 => {
            require(2, "title", &submission.title)?;
            require(2, "description", &submission.description)?;
            require(2, "primary SDG", &submission.primary_sdg)?;
            vocab::validate_sdg(&submission.primary_sdg)?;
            validate_secondary_sdgs(&submission.primary_sdg, &submission.secondary_sdgs)?;
            validate_team_members(&submission.team_members)?;
            Ok(())
        }
        3 => {
            require(3, "timeline", &submission.timeline)?;
            require(3, "expected impact", &submission.expected_impact)?;
            vocab::validate_timeline(&submission.timeline)?;
            Ok(())
        }
        other => Err(CoreError::Validation(format!(
            "Unknown form step {other}. Valid steps are 1-3"
        ))),
    }
}

/// Validate a complete submission (all three steps).
pub fn validate_submission(submission: &NewSubmission) -> Result<(), CoreError> {
    validate_step(submission, 1)?;
    validate_step(submission, 2)?;
    validate_step(submission, 3)?;
    Ok(())
}

/// Secondary SDGs must all be valid tags, contain no duplicates, and never
/// include the primary SDG.
fn validate_secondary_sdgs(primary: &str, secondary: &[String]) -> Result<(), CoreError> {
    for (i, tag) in secondary.iter().enumerate() {
        vocab::validate_sdg(tag)?;
        if tag == primary {
            return Err(CoreError::Validation(format!(
                "Secondary SDGs must not include the primary SDG '{primary}'"
            )));
        }
        if secondary[..i].contains(tag) {
            return Err(CoreError::Validation(format!(
                "Duplicate secondary SDG '{tag}'"
            )));
        }
    }
    Ok(())
}

/// At most [`MAX_TEAM_MEMBERS`] additional members, each with a non-empty
/// name and email.
fn validate_team_members(members: &[TeamMember]) -> Result<(), CoreError> {
    if members.len() > MAX_TEAM_MEMBERS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_TEAM_MEMBERS} additional team members are allowed (got {})",
            members.len()
        )));
    }
    for (i, member) in members.iter().enumerate() {
        if member.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Team member {} is missing a name",
                i + 1
            )));
        }
        if member.email.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Team member {} is missing an email",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Validate a mentor application: name, email, year, and branch are
/// required and must come from the form vocabularies.
pub fn validate_mentor_application(application: &NewMentorApplication) -> Result<(), CoreError> {
    require(1, "name", &application.name)?;
    require(1, "email", &application.email)?;
    require(1, "year", &application.year)?;
    require(1, "branch", &application.branch)?;
    vocab::validate_year(&application.year)?;
    vocab::validate_branch(&application.branch)?;
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
