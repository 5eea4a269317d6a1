//! Skimmer LLM Client Layer
//!
//! Chat-completion clients used by the remote-inference extraction strategy.
//!
//! # Architecture
//!
//! This crate defines the [`ChatCompleter`] trait and its implementations.
//! The extraction layer depends only on the trait, so strategies behave
//! identically against a live service or a scripted mock.
//!
//! # Clients
//!
//! - `MockChatClient`: deterministic scripted client for testing
//! - `AzureChatClient`: Azure OpenAI chat-completions integration
//!
//! # Examples
//!
//! ```
//! use skimmer_llm::{ChatCompleter, MockChatClient};
//!
//! # async fn example() {
//! let client = MockChatClient::new(r#"{"company": "Acme"}"#);
//! let reply = client.complete("test prompt").await.unwrap();
//! assert_eq!(reply, r#"{"company": "Acme"}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod azure;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use azure::AzureChatClient;

/// Errors that can occur while talking to an inference service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("communication error: {0}")]
    Communication(String),

    /// Authentication or authorization failure
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// Requested deployment does not exist
    #[error("deployment not available: {0}")]
    DeploymentNotAvailable(String),

    /// Reply did not have the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A chat-completion backend.
///
/// Implementations carry only immutable configuration (plus internally
/// synchronized clients), so a single instance can serve concurrent calls.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Send one prompt and return the model's text reply.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Scripted chat client for deterministic testing.
///
/// Replies are consumed in FIFO order; once the script is exhausted every
/// call returns the default reply. Errors can be scripted the same way,
/// which is how transient-failure scenarios are driven in tests.
///
/// # Examples
///
/// ```
/// use skimmer_llm::{ChatCompleter, LlmError, MockChatClient};
///
/// # async fn example() {
/// let client = MockChatClient::new("{}");
/// client.push_error(LlmError::RateLimited);
/// client.push_reply(r#"{"company": "Acme"}"#);
///
/// assert!(client.complete("p").await.is_err());
/// assert_eq!(client.complete("p").await.unwrap(), r#"{"company": "Acme"}"#);
/// assert_eq!(client.complete("p").await.unwrap(), "{}");
/// assert_eq!(client.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockChatClient {
    default_reply: String,
    script: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatClient {
    /// Create a mock that returns `default_reply` once its script runs out.
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            default_reply: default_reply.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(reply.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: LlmError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of times `complete` has been called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new("{}")
    }
}

#[async_trait]
impl ChatCompleter for MockChatClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        match self.script.lock().unwrap().pop_front() {
            Some(scripted) => scripted,
            None => Ok(self.default_reply.clone()),
        }
    }
}
