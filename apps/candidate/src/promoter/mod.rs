//! Promoter — the pluggable capability that actually sends an application.
//!
//! Default: `HttpPromoter` (reqwest, JSON body). Tests swap in a recording fake.
//! The evaluator holds an `Arc<dyn Promoter>` chosen at startup.

pub mod http;

use async_trait::async_trait;
use reqwest::{Method, Url};

use crate::application::Application;
use crate::errors::AppError;

pub use http::HttpPromoter;

/// An outbound application: method, target and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRequest {
    pub method: Method,
    pub url: Url,
    pub data: Application,
}

/// Implement this to change how applications leave the process without touching
/// the evaluator.
#[async_trait]
pub trait Promoter: Send + Sync {
    async fn promote(&self, request: ApplicationRequest) -> Result<(), AppError>;
}
