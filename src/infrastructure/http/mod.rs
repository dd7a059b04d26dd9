//! HTTP chat backend

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::application::errors::{ChatError, ConfigError};
use crate::domain::traits::ChatBackend;

/// Default ask endpoint of the chatbot server
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chatbot/ask";

/// Backend that POSTs each message to the chatbot ask endpoint. The client
/// carries no request timeout: a hung request simply keeps that round trip
/// waiting.
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// The endpoint URL is validated here so a bad address fails at startup
    /// instead of on the first send.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ConfigError::InvalidValue(format!("endpoint '{}': {}", endpoint, e)))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Request body for one round trip
#[derive(Serialize)]
struct AskRequest<'a> {
    message: &'a str,
}

/// Expected response body
#[derive(Deserialize, Debug)]
struct AskResponse {
    reply: String,
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn ask(&self, message: &str) -> Result<String, ChatError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&AskRequest { message })
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatError::Api(response.status().as_u16()));
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_wire_shape() {
        let request = AskRequest { message: "hello" };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "hello" }));
    }

    #[test]
    fn test_ask_response_parses_reply() {
        let body: AskResponse = serde_json::from_str(r#"{"reply":"Hi there!"}"#).unwrap();
        assert_eq!(body.reply, "Hi there!");
    }

    #[test]
    fn test_ask_response_ignores_extra_fields() {
        let body: AskResponse =
            serde_json::from_str(r#"{"reply":"ok","confidence":95}"#).unwrap();
        assert_eq!(body.reply, "ok");
    }

    #[test]
    fn test_ask_response_without_reply_is_a_parse_failure() {
        let result = serde_json::from_str::<AskResponse>(r#"{"answer":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_endpoint_rejected_at_construction() {
        let result = HttpBackend::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_valid_endpoint_accepted() {
        let backend = HttpBackend::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(backend.endpoint().path(), "/chatbot/ask");
    }
}
