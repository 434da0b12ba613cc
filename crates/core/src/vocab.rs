//! Enumerated form vocabularies and their validation functions.
//!
//! Defines the fixed option sets offered by the submission and mentor forms
//! (SDG tags, branches, years of study, timelines) and validation helpers
//! used by the intake layer before anything reaches the database.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// The 17 UN Sustainable Development Goal tags, in goal order.
pub const SDG_TAGS: &[&str] = &[
    "sdg-1", "sdg-2", "sdg-3", "sdg-4", "sdg-5", "sdg-6", "sdg-7", "sdg-8", "sdg-9", "sdg-10",
    "sdg-11", "sdg-12", "sdg-13", "sdg-14", "sdg-15", "sdg-16", "sdg-17",
];

/// All valid branch values offered by the form.
pub const VALID_BRANCHES: &[&str] = &[
    "cse", "ece", "eee", "mech", "civil", "chem", "it", "biotech", "other",
];

/// All valid year-of-study values.
pub const VALID_YEARS: &[&str] = &["1", "2", "3", "4", "graduate", "faculty"];

/// All valid project timeline values, in months.
pub const VALID_TIMELINES: &[&str] = &["3", "6", "12", "18", "24"];

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that an SDG tag is one of the 17 enumerated goals.
pub fn validate_sdg(tag: &str) -> Result<(), CoreError> {
    if SDG_TAGS.contains(&tag) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid SDG tag '{tag}'. Must be one of sdg-1 through sdg-17"
        )))
    }
}

/// Validate that a branch value is one the form offers.
pub fn validate_branch(branch: &str) -> Result<(), CoreError> {
    if VALID_BRANCHES.contains(&branch) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid branch '{branch}'. Must be one of: {}",
            VALID_BRANCHES.join(", ")
        )))
    }
}

/// Validate that a year-of-study value is one the form offers.
pub fn validate_year(year: &str) -> Result<(), CoreError> {
    if VALID_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid year '{year}'. Must be one of: {}",
            VALID_YEARS.join(", ")
        )))
    }
}

/// Validate that a timeline value is one of the offered durations.
pub fn validate_timeline(timeline: &str) -> Result<(), CoreError> {
    if VALID_TIMELINES.contains(&timeline) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid timeline '{timeline}'. Must be one of: {} (months)",
            VALID_TIMELINES.join(", ")
        )))
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_seventeen_sdg_tags() {
        assert_eq!(SDG_TAGS.len(), 17);
    }

    #[test]
    fn every_listed_sdg_validates() {
        for tag in SDG_TAGS {
            assert!(validate_sdg(tag).is_ok());
        }
    }

    #[test]
    fn sdg_validation_rejects_unknown_tags() {
        assert!(validate_sdg("sdg-18").is_err());
        assert!(validate_sdg("sdg-0").is_err());
        assert!(validate_sdg("climate").is_err());
        assert!(validate_sdg("").is_err());
    }

    #[test]
    fn branch_validation_accepts_listed_values() {
        assert!(validate_branch("cse").is_ok());
        assert!(validate_branch("other").is_ok());
    }

    #[test]
    fn branch_validation_rejects_unknown_values() {
        let err = validate_branch("aerospace").unwrap_err();
        assert!(err.to_string().contains("Invalid branch"));
    }

    #[test]
    fn year_validation_accepts_listed_values() {
        for year in VALID_YEARS {
            assert!(validate_year(year).is_ok());
        }
    }

    #[test]
    fn year_validation_rejects_unknown_values() {
        assert!(validate_year("5").is_err());
        assert!(validate_year("first").is_err());
    }

    #[test]
    fn timeline_validation_accepts_listed_values() {
        for timeline in VALID_TIMELINES {
            assert!(validate_timeline(timeline).is_ok());
        }
    }

    #[test]
    fn timeline_validation_rejects_unknown_values() {
        assert!(validate_timeline("9").is_err());
        assert!(validate_timeline("36").is_err());
    }
}
