//! Build submission
//!
//! `WorkflowSubmitter` abstracts over how a build request reaches the
//! backend, so sessions can be driven against the real HTTP endpoint or an
//! in-process stand-in. Submissions are single request/response exchanges;
//! there is no retry at this layer.

use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::request::BuildRequest;

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    /// HTTP status (or equivalent) reported by the backend
    pub status: u16,
    /// Response body, passed through uninterpreted
    pub body: serde_json::Value,
}

/// Trait for sending build requests to a backend
#[async_trait]
pub trait WorkflowSubmitter: Send + Sync {
    /// Submit a build request
    ///
    /// Returns an error if the request could not be delivered or the
    /// backend refused it.
    async fn submit(&self, request: &BuildRequest) -> Result<SubmitReceipt>;
}

/// Submits build requests as JSON over HTTP
pub struct HttpSubmitter {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmitter {
    /// Create a submitter for the endpoint described by `config`
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.build_url(),
        })
    }

    /// The endpoint requests are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WorkflowSubmitter for HttpSubmitter {
    async fn submit(&self, request: &BuildRequest) -> Result<SubmitReceipt> {
        log::info!(
            "Submitting build for '{}' ({} modules) to {}",
            request.agent_name,
            request.modules.len(),
            self.url
        );

        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text);
            log::warn!("Build backend returned {}: {}", status, message);
            return Err(ServiceError::rejected(status.as_u16(), message));
        }

        Ok(SubmitReceipt {
            status: status.as_u16(),
            body: parse_body(text),
        })
    }
}

/// Parse a response body as JSON, keeping non-JSON text as a string
fn parse_body(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}

/// Extract the backend's error message, preferring its `detail` field
fn error_message(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn sample_request() -> BuildRequest {
        BuildRequest {
            agent_name: "Mail Bot".to_string(),
            modules: Vec::new(),
            workflow_code: "@agent mail_bot v1.0\n@tier starter\n\n".to_string(),
        }
    }

    fn config_for(base_url: String) -> ServiceConfig {
        ServiceConfig {
            api_base_url: base_url,
            ..ServiceConfig::default()
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let router = Router::new().route(
            "/api/build/create",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({
                    "status": "queued",
                    "echo": body["agent_name"],
                }))
            }),
        );
        let base_url = spawn_backend(router).await;

        let submitter = HttpSubmitter::new(&config_for(base_url)).unwrap();
        let receipt = submitter.submit(&sample_request()).await.unwrap();

        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.body["status"], "queued");
        assert_eq!(receipt.body["echo"], "Mail Bot");
    }

    #[tokio::test]
    async fn test_submit_rejected_uses_detail() {
        let router = Router::new().route(
            "/api/build/create",
            post(|| async {
                (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(serde_json::json!({"detail": "License required"})),
                )
            }),
        );
        let base_url = spawn_backend(router).await;

        let submitter = HttpSubmitter::new(&config_for(base_url)).unwrap();
        let err = submitter.submit(&sample_request()).await.unwrap_err();

        match err {
            ServiceError::Rejected { status, message } => {
                assert_eq!(status, 402);
                assert_eq!(message, "License required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_url_from_config() {
        let submitter = HttpSubmitter::new(&config_for("http://localhost:9/".to_string())).unwrap();
        assert_eq!(submitter.url(), "http://localhost:9/api/build/create");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(String::new()), serde_json::Value::Null);
        assert_eq!(parse_body("{\"ok\":true}".to_string())["ok"], true);
        assert_eq!(
            parse_body("accepted".to_string()),
            serde_json::Value::String("accepted".to_string())
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message("{\"detail\":\"nope\"}"), "nope");
        assert_eq!(error_message(" Internal Server Error \n"), "Internal Server Error");
    }
}
