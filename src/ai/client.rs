use crate::error::{ConfigError, SelectError};
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";
pub const DEFAULT_TEMPERATURE: f32 = 0.9;
pub const DEFAULT_MAX_TOKENS: u32 = 120;

const SYSTEM_PROMPT: &str = "Kamu adalah pemandu permainan kartu obrolan. \
Kamu hanya menjawab dengan satu pertanyaan dalam Bahasa Indonesia.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}

/// Anything that can turn an instruction into generated text.
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn generate(
        &self,
        config: &ModelConfig,
        instruction: &str,
    ) -> Result<String, SelectError>;
}

#[derive(Debug)]
pub struct OpenRouterClient {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
}

impl OpenRouterClient {
    /// Reads `OPENROUTER_API_KEY` from the environment.
    pub fn new() -> Result<Self, ConfigError> {
        let client = openrouter_api::OpenRouterClient::quick()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TextBackend for OpenRouterClient {
    async fn generate(
        &self,
        config: &ModelConfig,
        instruction: &str,
    ) -> Result<String, SelectError> {
        let messages = vec![
            Message::text("system", SYSTEM_PROMPT),
            Message::text("user", instruction),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        let request = ChatCompletionRequest {
            model: config.model.clone(),
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: None,
            top_k: None,
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        };

        let response = self
            .client
            .chat()
            .map_err(|e| SelectError::BackendUnavailable(e.to_string()))?
            .chat_completion(request)
            .await
            .map_err(|e| SelectError::BackendUnavailable(format!("OpenRouter API error: {}", e)))?;

        let choice = response
            .choices
            .first()
            .ok_or(SelectError::BackendEmptyResponse)?;

        let text = match &choice.message.content {
            openrouter_api::MessageContent::Text(text) => text.clone(),
            openrouter_api::MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|p| {
                    if let openrouter_api::ContentPart::Text(tc) = p {
                        Some(tc.text.clone())
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };

        Ok(text)
    }
}
