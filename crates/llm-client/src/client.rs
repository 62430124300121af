use std::fmt;
use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::types::{ChatMessage, ChatRequest, ChatResponse, ServiceError};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Client for one advisory endpoint and model, fixed at construction.
pub struct AdvisoryClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AdvisoryClient {
    pub fn new(api_key: String, model: String, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Points the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submits the composed request as a single user message and returns the
    /// first completion's text verbatim.
    ///
    /// Failures are not retried here. An advisory call is expensive and an
    /// automatic resubmission duplicates that cost, so whether to run the
    /// cycle again is the caller's decision.
    #[instrument(skip(self, request_text), fields(model = %self.model))]
    pub async fn advise(&self, request_text: &str) -> Result<String, ServiceError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(request_text)],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout
                } else {
                    ServiceError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        let first = body
            .choices
            .into_iter()
            .next()
            .ok_or(ServiceError::NoCompletion)?;

        Ok(first.message.content)
    }
}

// Manual impl so the credential can never end up in logs.
impl fmt::Debug for AdvisoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisoryClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stub_client(server: &MockServer) -> AdvisoryClient {
        stub_client_with_timeout(server, 5_000)
    }

    fn stub_client_with_timeout(server: &MockServer, timeout_ms: u64) -> AdvisoryClient {
        AdvisoryClient::new("test-key".into(), "test-model".into(), timeout_ms)
            .with_base_url(server.uri())
    }

    fn completion_body(text: &str) -> serde_json::Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": text } }
            ]
        })
    }

    #[tokio::test]
    async fn returns_first_completion_text_unchanged() {
        let server = MockServer::start().await;
        let reply = "Invest 100 EUR in loan A.\nInvest 50 EUR in loan B.";
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
            .mount(&server)
            .await;

        let advice = stub_client(&server).advise("some request").await.unwrap();
        assert_eq!(advice, reply);
    }

    #[tokio::test]
    async fn sends_one_user_message_with_configured_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "messages": [
                    { "role": "user", "content": "the composed request" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        stub_client(&server)
            .advise("the composed request")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn surfaces_http_failure_without_retrying() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = stub_client(&server).advise("request").await.unwrap_err();
        match err {
            ServiceError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_provider_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("too late"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = stub_client_with_timeout(&server, 50)
            .advise("request")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Timeout));
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = stub_client(&server).advise("request").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoCompletion));
    }

    #[tokio::test]
    async fn undecodable_payload_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = stub_client(&server).advise("request").await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[test]
    fn debug_output_omits_the_credential() {
        let client = AdvisoryClient::new("sk-secret".into(), "test-model".into(), 5_000);
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("test-model"));
    }
}
