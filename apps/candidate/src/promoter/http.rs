use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{ApplicationRequest, Promoter};
use crate::errors::AppError;

/// Sends applications as JSON over HTTP. One attempt per request, no retries.
#[derive(Clone)]
pub struct HttpPromoter {
    client: Client,
}

impl HttpPromoter {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Promoter for HttpPromoter {
    async fn promote(&self, request: ApplicationRequest) -> Result<(), AppError> {
        debug!("{} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method, request.url)
            .header("content-type", "application/json")
            .json(&request.data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Application rejected with {}: {}", status, body);
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                body
            };
            return Err(AppError::Promotion {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Application;
    use reqwest::{Method, Url};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request_to(server: &MockServer) -> ApplicationRequest {
        let url = Url::parse(&format!(
            "{}/careers/apply?position=Frontend",
            server.uri()
        ))
        .unwrap();
        ApplicationRequest {
            method: Method::POST,
            url,
            data: Application {
                name: "Leon Brown".to_string(),
                skills: vec!["HTML".to_string(), "CSS".to_string()],
                photo: "formal-ref".to_string(),
            },
        }
    }

    fn promoter() -> HttpPromoter {
        HttpPromoter::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/careers/apply"))
            .and(query_param("position", "Frontend"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "name": "Leon Brown",
                "skills": ["HTML", "CSS"],
                "photo": "formal-ref"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        promoter().promote(request_to(&server)).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_promotion_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("position closed"))
            .mount(&server)
            .await;

        let err = promoter().promote(request_to(&server)).await.unwrap_err();
        match err {
            AppError::Promotion { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "position closed");
            }
            other => panic!("expected Promotion error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_reason_phrase() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = promoter().promote(request_to(&server)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Promotion { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_does_not_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        assert!(promoter().promote(request_to(&server)).await.is_err());
    }
}
