//! Application — builds the payload and outbound request for a job opening.
//!
//! Pure construction only: nothing here talks to the network. The evaluator hands
//! the finished `ApplicationRequest` to a `Promoter`.

pub mod style;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

use crate::dictionary::WordList;
use crate::errors::AppError;
use crate::profile::Profile;
use crate::promoter::ApplicationRequest;

const APPLY_SEGMENTS: [&str; 2] = ["careers", "apply"];

/// The opening being applied for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpening {
    pub job_title: String,
    pub company_name: String,
    /// Base URL, e.g. `https://acme.example`.
    pub company_url: String,
}

/// Request body sent to the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub skills: Vec<String>,
    pub photo: String,
}

/// Validates `opening` and assembles the POST to `<company_url>/careers/apply?position=<title>`.
/// The base URL is checked before the path is extended.
pub fn build_request(
    profile: &Profile,
    words: &WordList,
    opening: &JobOpening,
) -> Result<ApplicationRequest, AppError> {
    validate_opening(opening)?;

    let style = style::select_headshot(words, &opening.company_name);
    let application = Application {
        name: profile.full_name(),
        skills: profile.skills().to_vec(),
        photo: profile.headshot(style).to_string(),
    };

    Ok(ApplicationRequest {
        method: Method::POST,
        url: apply_url(&opening.company_url, &opening.job_title)?,
        data: application,
    })
}

fn apply_url(company_url: &str, job_title: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(company_url)
        .map_err(|e| AppError::invalid(format!("company_url '{company_url}' is not a URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https")
        || url.host_str().map_or(true, |host| host.is_empty())
    {
        return Err(AppError::invalid(format!(
            "company_url '{company_url}' must be an absolute http(s) URL"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::invalid(format!(
            "company_url '{company_url}' must not carry a query or fragment"
        )));
    }

    url.path_segments_mut()
        .map_err(|_| AppError::invalid(format!("company_url '{company_url}' cannot take a path")))?
        .pop_if_empty()
        .extend(APPLY_SEGMENTS);
    url.query_pairs_mut().append_pair("position", job_title);
    Ok(url)
}

fn validate_opening(opening: &JobOpening) -> Result<(), AppError> {
    if opening.job_title.trim().is_empty() {
        return Err(AppError::invalid("job_title cannot be empty"));
    }
    if opening.company_name.trim().is_empty() {
        return Err(AppError::invalid("company_name cannot be empty"));
    }
    Ok(())
}
