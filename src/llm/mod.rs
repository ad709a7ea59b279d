//! LLM integration for quantity inference.
//!
//! One transport today: the OpenAI-compatible chat completions API with API
//! key auth. Everything downstream depends on the [`LlmProvider`] trait, so
//! swapping backends is a config concern.

mod openai_chat;
mod provider;

pub use openai_chat::OpenAiChatProvider;
pub use provider::{
    ChatMessage, CompletionRequest, CompletionResponse, FinishReason, LlmProvider, Role,
};

use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::LlmError;

/// Create an LLM provider based on configuration.
pub fn create_llm_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    tracing::info!(model = %config.model, "Using chat completions API with API key auth");
    Ok(Arc::new(OpenAiChatProvider::new(config.clone())?))
}
