//! Mock provider implementation for testing.

use super::{ProviderError, ProviderReply, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted behavior for the mock provider.
pub enum MockBehavior {
    /// Successful reply with the given text.
    Reply(String),

    /// Successful HTTP exchange whose body carried no candidate text.
    EmptyReply,

    /// Non-success upstream HTTP status.
    ApiError { status: u16, body: String },

    /// Transport failure.
    NetworkError(String),
}

/// Mock text provider for testing.
///
/// Records every prompt it receives so tests can assert on prompt assembly
/// and on whether an outbound call happened at all.
pub struct MockTextProvider {
    behavior: MockBehavior,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of generate calls made so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderReply, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(ProviderReply {
                text: Some(text.clone()),
            }),
            MockBehavior::EmptyReply => Ok(ProviderReply { text: None }),
            MockBehavior::ApiError { status, body } => Err(ProviderError::ApiError {
                status: *status,
                body: body.clone(),
            }),
            MockBehavior::NetworkError(msg) => Err(ProviderError::NetworkError(msg.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
