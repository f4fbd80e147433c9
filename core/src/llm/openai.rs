//! OpenAI-compatible chat completion client

use crate::config::ApiConfig;
use crate::error::{ConfigError, RequestError};
use crate::llm::{CompletionBackend, RequestContext};
use crate::params::ParameterTuple;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for OpenAI-compatible chat completion endpoints
///
/// Serializes the two-message exchange with the upstream's original field
/// names (`max_tokens`, `presence_penalty`, `frequency_penalty`, `stop`) and
/// extracts the first choice's text.
pub struct OpenAiChatClient {
    client: Client,
    config: ApiConfig,
}

impl OpenAiChatClient {
    /// Create a new client from a resolved configuration
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn build_request(
        &self,
        context: &RequestContext,
        tuple: &ParameterTuple,
    ) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(2);
        if !context.system_prompt.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: context.system_prompt.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: context.user_prompt.clone(),
        });

        ChatCompletionRequest {
            model: context.model.clone(),
            messages,
            temperature: tuple.temperature,
            max_tokens: tuple.max_tokens,
            presence_penalty: tuple.presence_penalty,
            frequency_penalty: tuple.frequency_penalty,
            // An empty stop string is treated as absent on the wire.
            stop: tuple.stop_sequence.clone().filter(|s| !s.is_empty()),
        }
    }

    fn extract_content(&self, response: ChatCompletionResponse) -> Result<String, RequestError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RequestError::InvalidResponse {
                message: "No choices in response".to_string(),
            })?;

        choice
            .message
            .content
            .ok_or_else(|| RequestError::InvalidResponse {
                message: "Response choice has no content".to_string(),
            })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiChatClient {
    fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.config.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    async fn complete(
        &self,
        context: &RequestContext,
        tuple: &ParameterTuple,
    ) -> Result<String, RequestError> {
        let request = self.build_request(context, tuple);
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request);
        for (key, value) in &self.config.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| RequestError::Network {
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            tracing::error!("chat completion request failed with status {}", status);
            return Err(RequestError::Api { status, message });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| RequestError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        self.extract_content(completion)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    presence_penalty: f32,
    frequency_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAiChatClient {
        OpenAiChatClient::new(ApiConfig::new("sk-test", "gpt-3.5-turbo")).unwrap()
    }

    fn tuple() -> ParameterTuple {
        ParameterTuple {
            temperature: 0.5,
            max_tokens: 150,
            presence_penalty: 1.5,
            frequency_penalty: 0.0,
            stop_sequence: None,
        }
    }

    fn context() -> RequestContext {
        RequestContext::new("gpt-3.5-turbo", "You are terse.", "Describe a lamp")
    }

    #[test]
    fn test_new_rejects_missing_api_key() {
        let result = OpenAiChatClient::new(ApiConfig::new("", "gpt-3.5-turbo"));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_ensure_configured_with_key() {
        assert!(client().ensure_configured().is_ok());
    }

    #[test]
    fn test_request_uses_legacy_field_names() {
        let request = client().build_request(&context(), &tuple());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["presence_penalty"], 1.5);
        assert_eq!(body["frequency_penalty"], 0.0);
    }

    #[test]
    fn test_stop_omitted_when_absent() {
        let request = client().build_request(&context(), &tuple());
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("stop").is_none());
    }

    #[test]
    fn test_stop_included_when_pinned() {
        let mut tuple = tuple();
        tuple.stop_sequence = Some("END".to_string());

        let request = client().build_request(&context(), &tuple);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["stop"], "END");
    }

    #[test]
    fn test_empty_stop_omitted_from_wire() {
        let mut tuple = tuple();
        tuple.stop_sequence = Some(String::new());

        let request = client().build_request(&context(), &tuple);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("stop").is_none());
    }

    #[test]
    fn test_system_message_precedes_user_message() {
        let request = client().build_request(&context(), &tuple());

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, "You are terse.");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "Describe a lamp");
    }

    #[test]
    fn test_blank_system_prompt_omits_system_message() {
        let context = RequestContext::new("gpt-3.5-turbo", "", "Describe a lamp");
        let request = client().build_request(&context, &tuple());

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
    }

    #[test]
    fn test_extract_first_choice_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"a lamp"}},{"message":{"role":"assistant","content":"second"}}]}"#,
        )
        .unwrap();

        assert_eq!(client().extract_content(response).unwrap(), "a lamp");
    }

    #[test]
    fn test_empty_choices_is_invalid_response() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            client().extract_content(response),
            Err(RequestError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_null_content_is_invalid_response() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(
            client().extract_content(response),
            Err(RequestError::InvalidResponse { .. })
        ));
    }
}
