//! Candidate profile: job compatibility checks and application submission.

pub mod application;
pub mod compatibility;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod evaluator;
pub mod profile;
pub mod promoter;

pub use errors::AppError;
pub use evaluator::{Listing, ListingOutcome, ProfileEvaluator};
