//! Remote-inference extraction strategy

use crate::parser::parse_reply;
use crate::prompt::PromptBuilder;
use async_trait::async_trait;
use skimmer_domain::{EntityExtractor, EntityMap, ExtractError, FieldSet};
use skimmer_llm::{ChatCompleter, LlmError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Default per-call completion timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Extracts fields by asking a chat-completion model.
///
/// Builds a prompt naming the required fields, sends it through the
/// configured [`ChatCompleter`], and parses the JSON reply. The completion
/// call is the strategy's only suspension point and is bounded by a timeout.
pub struct LlmExtractor<C: ChatCompleter> {
    client: Arc<C>,
    call_timeout: Duration,
}

impl<C: ChatCompleter> LlmExtractor<C> {
    /// Create an extractor over a chat client.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            call_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }
}

#[async_trait]
impl<C: ChatCompleter + 'static> EntityExtractor for LlmExtractor<C> {
    async fn extract(&self, document: &str, fields: &FieldSet) -> Result<EntityMap, ExtractError> {
        let prompt = PromptBuilder::new(document, fields).build();
        debug!(prompt_len = prompt.len(), "sending extraction prompt");

        let reply = timeout(self.call_timeout, self.client.complete(&prompt))
            .await
            .map_err(|_| ExtractError::Transport("completion timed out".to_string()))?
            .map_err(map_llm_error)?;

        debug!(reply_len = reply.len(), "received model reply");

        let entities = parse_reply(&reply, fields)?;

        info!(
            found = entities.len(),
            required = fields.len(),
            "llm extraction finished"
        );

        Ok(entities)
    }
}

/// Transport-shaped client failures stay transport; only an undecodable
/// reply counts as a parse failure.
fn map_llm_error(error: LlmError) -> ExtractError {
    match error {
        LlmError::InvalidResponse(msg) => ExtractError::Parse(msg),
        other => ExtractError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skimmer_llm::MockChatClient;

    fn fields() -> FieldSet {
        FieldSet::new(["company", "budget", "deadline"]).unwrap()
    }

    #[tokio::test]
    async fn test_extract_parses_reply() {
        let client = MockChatClient::new(r#"{"company": "Acme", "budget": "$10000"}"#);
        let extractor = LlmExtractor::new(client);

        let entities = extractor.extract("doc", &fields()).await.unwrap();
        assert_eq!(entities.get("company"), Some("Acme"));
        assert_eq!(entities.get("budget"), Some("$10000"));
        assert!(!entities.contains("deadline"));
    }

    #[tokio::test]
    async fn test_client_failure_maps_to_transport() {
        let client = MockChatClient::default();
        client.push_error(LlmError::Communication("connection refused".into()));
        let extractor = LlmExtractor::new(client);

        let result = extractor.extract("doc", &fields()).await;
        assert!(matches!(result, Err(ExtractError::Transport(_))));
    }

    #[tokio::test]
    async fn test_invalid_response_maps_to_parse() {
        let client = MockChatClient::default();
        client.push_error(LlmError::InvalidResponse("no choices".into()));
        let extractor = LlmExtractor::new(client);

        let result = extractor.extract("doc", &fields()).await;
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_parse_error() {
        let client = MockChatClient::new("Sorry, I cannot help with that.");
        let extractor = LlmExtractor::new(client);

        let result = extractor.extract("doc", &fields()).await;
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
