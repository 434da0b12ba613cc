//! Submission status machine and tracker projection.
//!
//! A submission progresses through five ordered stages
//! (`received → under-review → selected → in-progress → completed`), with
//! `rejected` reachable from any of them. The stage index, progress
//! percentage, and "what's next" text shown on the public tracker are all
//! derived from the status here — nothing else is stored.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Status enum
-------------------------------------------------------------------------- */

/// Number of stages in the canonical progression (rejected is not a stage).
pub const STAGE_COUNT: usize = 5;

/// Lifecycle status of a project submission.
///
/// Stored as its kebab-case wire string in the `project_submissions.status`
/// column; parse with [`SubmissionStatus::parse`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Received,
    UnderReview,
    Selected,
    InProgress,
    Completed,
    Rejected,
}

/// All statuses in progression order, `rejected` last.
pub const ALL_STATUSES: &[SubmissionStatus] = &[
    SubmissionStatus::Received,
    SubmissionStatus::UnderReview,
    SubmissionStatus::Selected,
    SubmissionStatus::InProgress,
    SubmissionStatus::Completed,
    SubmissionStatus::Rejected,
];

impl SubmissionStatus {
    /// The wire/storage string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Received => "received",
            SubmissionStatus::UnderReview => "under-review",
            SubmissionStatus::Selected => "selected",
            SubmissionStatus::InProgress => "in-progress",
            SubmissionStatus::Completed => "completed",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// Parse a wire string into a status.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "received" => Ok(SubmissionStatus::Received),
            "under-review" => Ok(SubmissionStatus::UnderReview),
            "selected" => Ok(SubmissionStatus::Selected),
            "in-progress" => Ok(SubmissionStatus::InProgress),
            "completed" => Ok(SubmissionStatus::Completed),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid submission status '{other}'. Must be one of: {}",
                ALL_STATUSES
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Position in the five-stage progression. `None` for `rejected`.
    pub fn stage_index(self) -> Option<usize> {
        match self {
            SubmissionStatus::Received => Some(0),
            SubmissionStatus::UnderReview => Some(1),
            SubmissionStatus::Selected => Some(2),
            SubmissionStatus::InProgress => Some(3),
            SubmissionStatus::Completed => Some(4),
            SubmissionStatus::Rejected => None,
        }
    }

    /// Tracker progress percentage: `(stage_index + 1) / 5 * 100`, 0 when rejected.
    pub fn progress_percent(self) -> u8 {
        match self.stage_index() {
            Some(index) => (((index + 1) * 100) / STAGE_COUNT) as u8,
            None => 0,
        }
    }

    /// True for the two end states of the normal flow.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionStatus::Completed | SubmissionStatus::Rejected
        )
    }

    /// The canned "What's next?" message for the public tracker.
    ///
    /// Terminal states have no next step and return `None`.
    pub fn next_step(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Received => {
                Some("Our evaluation team will review your submission within 2 weeks.")
            }
            SubmissionStatus::UnderReview => Some(
                "We're currently evaluating your project proposal. You'll hear from us soon!",
            ),
            SubmissionStatus::Selected => Some(
                "Congratulations! Our team will contact you within 3-5 days to discuss next steps.",
            ),
            SubmissionStatus::InProgress => Some(
                "Your project is being developed. We'll keep you updated on progress milestones.",
            ),
            SubmissionStatus::Completed | SubmissionStatus::Rejected => None,
        }
    }
}

/* --------------------------------------------------------------------------
Stage descriptors
-------------------------------------------------------------------------- */

/// Static display copy for one stage of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    pub status: SubmissionStatus,
    pub title: &'static str,
    pub description: &'static str,
}

/// The five tracker stages in progression order.
pub const STAGES: [StageDescriptor; STAGE_COUNT] = [
    StageDescriptor {
        status: SubmissionStatus::Received,
        title: "Received",
        description: "Your idea has been submitted successfully",
    },
    StageDescriptor {
        status: SubmissionStatus::UnderReview,
        title: "Under Review",
        description: "Our team is evaluating your proposal",
    },
    StageDescriptor {
        status: SubmissionStatus::Selected,
        title: "Selected for Stage 2",
        description: "Congratulations! Your idea has been shortlisted",
    },
    StageDescriptor {
        status: SubmissionStatus::InProgress,
        title: "In Progress",
        description: "Your project is being developed",
    },
    StageDescriptor {
        status: SubmissionStatus::Completed,
        title: "Completed",
        description: "Project successfully completed",
    },
];

/* --------------------------------------------------------------------------
Transition policy
-------------------------------------------------------------------------- */

/// Check whether a transition out of `from` is permitted.
///
/// Transitions are any-to-any by default. With `lock_terminal` enabled,
/// `completed` and `rejected` refuse outgoing transitions.
pub fn check_transition(
    from: SubmissionStatus,
    to: SubmissionStatus,
    lock_terminal: bool,
) -> Result<(), CoreError> {
    if lock_terminal && from.is_terminal() && from != to {
        return Err(CoreError::Conflict(format!(
            "Submission is in terminal status '{}' and cannot transition to '{}'",
            from.as_str(),
            to.as_str()
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
