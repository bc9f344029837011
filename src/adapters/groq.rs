//! Groq adapter for model invocation.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. Structured mode
//! embeds the JSON schema in the system message and requests a JSON object
//! response; a content string that fails to parse as JSON maps to an absent
//! result rather than an error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{ModelAdapter, ModelError};

/// Default Groq API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model adapter backed by Groq's OpenAI-compatible API
pub struct GroqAdapter {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqAdapter {
    /// Create an adapter against the default Groq endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Create an adapter with a custom base URL (for mock servers in tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Send a chat-completions request and return the first choice's content
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, ModelError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            response_format,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(ModelError::Api { status, message });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(format!("failed to parse response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ModelError::InvalidResponse("response contained no choices".into()))
    }
}

#[async_trait]
impl ModelAdapter for GroqAdapter {
    fn name(&self) -> &str {
        "groq"
    }

    async fn invoke(&self, prompt: &str) -> Result<String, ModelError> {
        self.chat(vec![ChatMessage::user(prompt)], None).await
    }

    async fn invoke_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<Option<Value>, ModelError> {
        let system = format!(
            "Respond with a single JSON object conforming to this JSON Schema. \
             Output only the object, no prose.\n{schema}"
        );
        let messages = vec![ChatMessage::system(system), ChatMessage::user(prompt)];

        let content = self
            .chat(messages, Some(ResponseFormat::json_object()))
            .await?;

        // A constrained decode that yields non-JSON is an absent result,
        // not a transport failure.
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(error = %e, "structured response was not valid JSON");
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

impl ResponseFormat {
    fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_creation() {
        let adapter = GroqAdapter::new("test-key", "llama-3.1-8b-instant");
        assert_eq!(adapter.name(), "groq");
        assert_eq!(adapter.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let adapter =
            GroqAdapter::with_base_url("test-key", "llama-3.1-8b-instant", "http://localhost:9090");
        assert_eq!(adapter.base_url, "http://localhost:9090");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "hello"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "hello");
    }

    #[test]
    fn test_request_skips_absent_response_format() {
        let request = ChatRequest {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![ChatMessage::user("hi")],
            response_format: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("response_format").is_none());
    }
}
