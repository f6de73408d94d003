//! Compatibility — checks a job posting against the profile.
//!
//! The fear string is a hard veto: a description containing it is incompatible no
//! matter how many skills match. Without the veto every posting is compatible; the
//! match count only changes which encouragement gets logged.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::Profile;

/// Matches at or above this count log the "bills paid" outlook.
pub const BILLS_PAID_THRESHOLD: usize = 4;

/// A job posting as seen by the compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub description: String,
    pub required_skills: Vec<String>,
    /// Only used in the veto diagnostic.
    pub company_address: String,
}

/// Which diagnostic path an assessment took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Vetoed,
    BillsPaid,
    LearnFast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityReport {
    pub compatible: bool,
    /// Required skills present in the profile, in posting order. Empty when vetoed.
    pub matched_skills: Vec<String>,
    pub outlook: Outlook,
}

/// Runs the veto and skill match for `posting`, logging the outcome.
pub fn assess(profile: &Profile, posting: &JobPosting) -> Result<CompatibilityReport, AppError> {
    validate_posting(posting)?;

    if posting.description.contains(profile.fears()) {
        warn!("ALERT! {} is now a NO-GO zone.", posting.company_address);
        return Ok(CompatibilityReport {
            compatible: false,
            matched_skills: vec![],
            outlook: Outlook::Vetoed,
        });
    }

    let matched_skills: Vec<String> = posting
        .required_skills
        .iter()
        .filter(|skill| profile.has_skill(skill))
        .cloned()
        .collect();

    let outlook = if matched_skills.len() >= BILLS_PAID_THRESHOLD {
        info!("Bills paid 💷");
        Outlook::BillsPaid
    } else {
        info!("Apply anyway and learn fast! 👍");
        Outlook::LearnFast
    };

    Ok(CompatibilityReport {
        compatible: true,
        matched_skills,
        outlook,
    })
}

fn validate_posting(posting: &JobPosting) -> Result<(), AppError> {
    if let Some(pos) = posting
        .required_skills
        .iter()
        .position(|s| s.trim().is_empty())
    {
        return Err(AppError::invalid(format!(
            "required_skills[{pos}] cannot be blank"
        )));
    }
    Ok(())
}
