//! ProfileEvaluator — the profile plus its collaborators, exposing the two public operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::{self, JobOpening};
use crate::compatibility::{self, CompatibilityReport, JobPosting};
use crate::dictionary::WordList;
use crate::errors::AppError;
use crate::profile::Profile;
use crate::promoter::Promoter;

/// A posting and its opening in one document, as read by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(flatten)]
    pub posting: JobPosting,
    #[serde(flatten)]
    pub opening: JobOpening,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOutcome {
    pub report: CompatibilityReport,
    pub applied: bool,
}

pub struct ProfileEvaluator {
    profile: Profile,
    words: Arc<WordList>,
    promoter: Arc<dyn Promoter>,
}

impl ProfileEvaluator {
    pub fn new(profile: Profile, words: Arc<WordList>, promoter: Arc<dyn Promoter>) -> Self {
        Self {
            profile,
            words,
            promoter,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Full compatibility assessment, including which diagnostic path was taken.
    pub fn assess_job(&self, posting: &JobPosting) -> Result<CompatibilityReport, AppError> {
        compatibility::assess(&self.profile, posting)
    }

    /// False only when the description contains the profile's fear string.
    pub fn is_compatible_with_job(&self, posting: &JobPosting) -> Result<bool, AppError> {
        Ok(self.assess_job(posting)?.compatible)
    }

    /// Builds the application for `opening` and hands it to the promoter.
    /// Promoter errors are returned as-is.
    pub async fn apply_for_job(&self, opening: &JobOpening) -> Result<(), AppError> {
        let request = application::build_request(&self.profile, &self.words, opening)?;
        info!(
            "Applying for {} at {}",
            opening.job_title, opening.company_name
        );
        self.promoter.promote(request).await
    }

    /// Assesses the listing and applies only when it is compatible.
    pub async fn pursue(&self, listing: &Listing) -> Result<ListingOutcome, AppError> {
        let report = self.assess_job(&listing.posting)?;
        if !report.compatible {
            info!("Skipping {}", listing.opening.company_name);
            return Ok(ListingOutcome {
                report,
                applied: false,
            });
        }

        self.apply_for_job(&listing.opening).await?;
        Ok(ListingOutcome {
            report,
            applied: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Headshots;
    use crate::promoter::testing::RecordingPromoter;
    use reqwest::Method;

    const FEAR: &str = "Spiders that dissapear when you look away for like, ONE second.";
    const SKILL_CASES: [&[&str]; 3] = [&["HTML", "CSS", "React", "Redux"], &["Rust"], &[]];

    fn evaluator(promoter: Arc<RecordingPromoter>) -> ProfileEvaluator {
        ProfileEvaluator::new(
            Profile::leon_brown(Headshots::new("casual-ref", "formal-ref")),
            Arc::new(WordList::builtin()),
            promoter,
        )
    }

    fn posting(description: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            description: description.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            company_address: "42 Leith Walk".to_string(),
        }
    }

    fn opening(name: &str) -> JobOpening {
        JobOpening {
            job_title: "Frontend".to_string(),
            company_name: name.to_string(),
            company_url: "https://jobs.example".to_string(),
        }
    }

    #[test]
    fn test_veto_returns_false_regardless_of_skills() {
        let eval = evaluator(Arc::new(RecordingPromoter::default()));
        for skills in SKILL_CASES {
            let description = format!("Perks: {FEAR}");
            assert!(!eval.is_compatible_with_job(&posting(&description, skills)).unwrap());
        }
    }

    #[test]
    fn test_no_veto_returns_true_regardless_of_matches() {
        let eval = evaluator(Arc::new(RecordingPromoter::default()));
        for skills in SKILL_CASES {
            assert!(eval.is_compatible_with_job(&posting("Nice office", skills)).unwrap());
        }
    }

    #[tokio::test]
    async fn test_apply_sends_one_post() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        eval.apply_for_job(&opening("Acme")).await.unwrap();

        let recorded = promoter.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, Method::POST);
        assert_eq!(
            recorded[0].url.as_str(),
            "https://jobs.example/careers/apply?position=Frontend"
        );
        assert_eq!(recorded[0].data.name, "Leon Brown");
        assert_eq!(recorded[0].data.photo, "formal-ref");
    }

    #[tokio::test]
    async fn test_apply_twice_sends_identical_payloads() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        eval.apply_for_job(&opening("the")).await.unwrap();
        eval.apply_for_job(&opening("the")).await.unwrap();

        let recorded = promoter.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(
            serde_json::to_vec(&recorded[0].data).unwrap(),
            serde_json::to_vec(&recorded[1].data).unwrap()
        );
        assert_eq!(recorded[0].data.photo, "casual-ref");
    }

    #[tokio::test]
    async fn test_promoter_error_propagates_unchanged() {
        let promoter = Arc::new(RecordingPromoter::failing(409));
        let eval = evaluator(promoter.clone());

        let err = eval.apply_for_job(&opening("Acme")).await.unwrap_err();
        match err {
            AppError::Promotion { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "rejected by fake");
            }
            other => panic!("expected Promotion error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_opening_never_reaches_promoter() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        let mut bad = opening("Acme");
        bad.company_url = "not a url".to_string();
        let err = eval.apply_for_job(&bad).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(promoter.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_operations_leave_skills_untouched() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter);
        let before = eval.profile().skills().to_vec();

        eval.assess_job(&posting("Nice office", &["HTML"])).unwrap();
        eval.apply_for_job(&opening("Acme")).await.unwrap();

        assert_eq!(eval.profile().skills(), before.as_slice());
    }

    #[tokio::test]
    async fn test_veto_does_not_block_apply() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        assert!(!eval.is_compatible_with_job(&posting(FEAR, &[])).unwrap());
        eval.apply_for_job(&opening("Acme")).await.unwrap();
        assert_eq!(promoter.recorded().len(), 1);
    }

    fn listing(description: &str) -> Listing {
        Listing {
            posting: posting(description, &["HTML", "CSS", "React", "Redux"]),
            opening: opening("Acme"),
        }
    }

    #[tokio::test]
    async fn test_pursue_applies_when_compatible() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        let outcome = eval.pursue(&listing("Frontend team")).await.unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.report.outlook, crate::compatibility::Outlook::BillsPaid);
        assert_eq!(promoter.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_pursue_skips_vetoed_listing() {
        let promoter = Arc::new(RecordingPromoter::default());
        let eval = evaluator(promoter.clone());

        let outcome = eval.pursue(&listing(FEAR)).await.unwrap();
        assert!(!outcome.applied);
        assert!(!outcome.report.compatible);
        assert!(promoter.recorded().is_empty());
    }

    #[test]
    fn test_listing_deserializes_flat_document() {
        let json = r#"{
            "description": "React shop",
            "required_skills": ["React"],
            "company_address": "Leith",
            "job_title": "Frontend",
            "company_name": "Acme",
            "company_url": "https://acme.example"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.posting.required_skills, ["React"]);
        assert_eq!(listing.opening.company_name, "Acme");
    }
}
