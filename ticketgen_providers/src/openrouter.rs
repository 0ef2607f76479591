use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{Value, json};
use ticketgen_core::{ChatMessage, LLMProvider, LLMResponse, ProviderError, Sampling, Usage};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used when the configuration names none.
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Provider for OpenRouter and other OpenAI-compatible chat completion APIs.
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenRouterProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read the body as JSON, mapping non-success statuses to `ProviderError`.
    async fn json_body(response: Response) -> anyhow::Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), &body).into());
        }
        Ok(response.json::<Value>().await?)
    }
}

/// Pull the reply text and token usage out of a chat completion body.
pub fn parse_chat_response(response: &Value) -> Result<LLMResponse, ProviderError> {
    if let Some(message) = response["error"]["message"].as_str() {
        return Err(ProviderError::MalformedResponse(message.to_string()));
    }

    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ProviderError::MalformedResponse("missing content".to_string()))?;
    if content.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let usage = response["usage"].as_object().map(|u| Usage {
        prompt_tokens: u32::try_from(u["prompt_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
        completion_tokens: u32::try_from(u["completion_tokens"].as_u64().unwrap_or(0))
            .unwrap_or(0),
        total_tokens: u32::try_from(u["total_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
    });

    Ok(LLMResponse {
        content: content.to_string(),
        usage,
    })
}

/// Model identifiers from a `/models` catalog body.
pub fn parse_model_list(response: &Value) -> Result<Vec<String>, ProviderError> {
    let data = response["data"]
        .as_array()
        .ok_or_else(|| ProviderError::MalformedResponse("missing model data".to_string()))?;

    Ok(data
        .iter()
        .filter_map(|m| m["id"].as_str().map(ToString::to_string))
        .collect())
}

#[async_trait]
impl LLMProvider for OpenRouterProvider {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        sampling: Sampling,
    ) -> anyhow::Result<LLMResponse> {
        let request = json!({
            "model": model,
            "messages": messages,
            "temperature": sampling.temperature,
            "max_tokens": sampling.max_tokens,
        });

        info!("Sending request to OpenRouter API: model={}", model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = Self::json_body(response).await?;

        info!("Received response from OpenRouter API");
        Ok(parse_chat_response(&body)?)
    }

    async fn list_models(&self) -> anyhow::Result<Vec<String>> {
        info!("Fetching model catalog from {}", self.base_url);

        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let body = Self::json_body(response).await?;

        let models = parse_model_list(&body)?;
        info!("Catalog lists {} models", models.len());
        Ok(models)
    }

    fn get_default_model(&self) -> &'static str {
        DEFAULT_MODEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_content_and_usage() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "{\"user\": \"A\"}"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20}
        });
        let response = parse_chat_response(&body);
        assert!(response.is_ok());
        if let Ok(response) = response {
            assert_eq!(response.content, "{\"user\": \"A\"}");
            assert_eq!(response.usage.map(|u| u.total_tokens), Some(20));
        }
    }

    #[test]
    fn missing_content_is_malformed() {
        let body = json!({"choices": []});
        assert!(matches!(
            parse_chat_response(&body),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn blank_content_is_empty_response() {
        let body = json!({"choices": [{"message": {"content": "  \n"}}]});
        assert!(matches!(
            parse_chat_response(&body),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn error_body_is_surfaced() {
        let body = json!({"error": {"message": "No endpoints found", "code": 404}});
        match parse_chat_response(&body) {
            Err(ProviderError::MalformedResponse(msg)) => assert_eq!(msg, "No endpoints found"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_model_catalog() {
        let body = json!({"data": [{"id": "a/b"}, {"name": "no id"}, {"id": "c/d"}]});
        let models = parse_model_list(&body).unwrap_or_default();
        assert_eq!(models, vec!["a/b", "c/d"]);
        assert!(parse_model_list(&json!({})).is_err());
    }

    #[test]
    fn default_model_is_advertised() {
        let provider = OpenRouterProvider::new("k".to_string());
        assert_eq!(provider.get_default_model(), DEFAULT_MODEL);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider =
            OpenRouterProvider::new("k".to_string()).with_base_url("http://localhost:8080/v1/".to_string());
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
    }
}
