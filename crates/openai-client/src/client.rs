use crate::error::ChatClientError;
use crate::types::{ApiErrorBody, ChatRequest, ChatResponse};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Blocking chat-completions client.
///
/// One outbound call type, no retries: a failed request surfaces as an error
/// and the caller aborts. Timeouts are whatever reqwest defaults to.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Send a completion request and return the first choice's content.
    ///
    /// Blocks until the endpoint responds. 401/403 maps to `AuthFailed`,
    /// 429 to `QuotaExhausted`; any other non-2xx becomes `Api`.
    pub fn complete(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %request.model, messages = request.messages.len(), "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(match status.as_u16() {
                401 | 403 => ChatClientError::AuthFailed,
                429 => ChatClientError::QuotaExhausted(message),
                code => ChatClientError::Api {
                    status: code,
                    message,
                },
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        if let Some(usage) = parsed.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion usage"
            );
        }
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ChatClientError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.7,
            max_tokens: None,
        }
    }

    #[test]
    fn complete_returns_first_choice() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [
                        {"message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                        {"message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
                    ],
                    "usage": {"prompt_tokens": 5, "completion_tokens": 2}
                }"#,
            )
            .create();

        let client = ChatClient::with_base_url("test-key", server.url());
        let out = client.complete(&request()).unwrap();
        assert_eq!(out, "first");
    }

    #[test]
    fn unauthorized_maps_to_auth_failed() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
            .create();

        let client = ChatClient::with_base_url("bad-key", server.url());
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, ChatClientError::AuthFailed));
    }

    #[test]
    fn rate_limit_maps_to_quota_exhausted() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": {"message": "You exceeded your current quota"}}"#)
            .create();

        let client = ChatClient::with_base_url("test-key", server.url());
        let err = client.complete(&request()).unwrap_err();
        match err {
            ChatClientError::QuotaExhausted(msg) => {
                assert!(msg.contains("quota"));
            }
            other => panic!("expected QuotaExhausted, got {other:?}"),
        }
    }

    #[test]
    fn server_error_carries_status_and_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("not json at all")
            .create();

        let client = ChatClient::with_base_url("test-key", server.url());
        let err = client.complete(&request()).unwrap_err();
        match err {
            ChatClientError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn empty_choices_is_an_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create();

        let client = ChatClient::with_base_url("test-key", server.url());
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, ChatClientError::EmptyResponse));
    }
}
