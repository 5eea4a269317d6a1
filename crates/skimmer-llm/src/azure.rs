//! Azure OpenAI Chat Client
//!
//! Talks to an Azure OpenAI chat-completions deployment. The deployment
//! identifier, API version and sampling temperature are opaque pass-through
//! configuration; nothing above this crate interprets them.
//!
//! # Examples
//!
//! ```no_run
//! use skimmer_llm::AzureChatClient;
//!
//! let client = AzureChatClient::new(
//!     "https://my-resource.openai.azure.com",
//!     "api-key-value",
//!     "gpt-4o-mini",
//! )
//! .with_temperature(0.0);
//! ```

use crate::{ChatCompleter, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API version for the chat-completions endpoint
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

/// Default timeout for completion requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Azure OpenAI chat-completions client.
///
/// Configuration is immutable after construction and the underlying
/// `reqwest::Client` is internally shareable, so one instance can be reused
/// across concurrent pipeline runs.
pub struct AzureChatClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    temperature: f64,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl AzureChatClient {
    /// Create a client for one deployment.
    ///
    /// `endpoint` is the resource base URL (e.g.
    /// `https://my-resource.openai.azure.com`); a trailing slash is allowed.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            deployment: deployment.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            temperature: 0.0,
            client,
        }
    }

    /// Override the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

#[async_trait]
impl ChatCompleter for AzureChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.url())
            .header("api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(LlmError::Auth(format!("HTTP {}", status)));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::DeploymentNotAvailable(self.deployment.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("reply contained no choices".to_string()))
    }
}
