//! LLM-backed agents
//!
//! [`LlmAgent`] is the handle a workflow holds: just the descriptor, no
//! credentials. The runner binds it to a provider right before the run,
//! producing a [`BoundAgent`] that can actually talk to a model.

use crate::runner::RunnerConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use zee_core::{Agent, AgentConfig, Context, Error, Result};
use zee_llm::{CompletionRequest, LLMProvider, Message};

/// Agent handle built from an [`AgentConfig`]
///
/// # Example
///
/// ```
/// use zee_core::{AgentConfig, ModelConfig};
/// use zee_workflow::LlmAgent;
///
/// let agent = LlmAgent::new(AgentConfig::new(
///     "Agent1",
///     ModelConfig::openai("gpt-4o-mini"),
///     "A helpful AI assistant that can engage in conversation.",
/// ));
///
/// assert_eq!(agent.name(), "Agent1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmAgent {
    config: AgentConfig,
}

impl LlmAgent {
    /// Create a new agent handle
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }

    /// Get the agent's descriptor
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Get the agent's name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// System prompt sent with every completion
    pub fn system_prompt(&self) -> String {
        format!("You are {}. {}", self.config.name, self.config.description)
    }

    /// Attach a provider, producing a runnable agent
    pub fn bind(&self, provider: Arc<dyn LLMProvider>, settings: &RunnerConfig) -> BoundAgent {
        BoundAgent {
            agent: self.clone(),
            provider,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }
}

/// An [`LlmAgent`] attached to a model provider
pub struct BoundAgent {
    agent: LlmAgent,
    provider: Arc<dyn LLMProvider>,
    max_tokens: usize,
    temperature: f32,
}

impl BoundAgent {
    /// Get the underlying agent handle
    pub fn agent(&self) -> &LlmAgent {
        &self.agent
    }
}

#[async_trait]
impl Agent for BoundAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        let config = self.agent.config();
        let request = CompletionRequest::builder(&config.model.name)
            .messages(vec![Message::user(input)])
            .system(self.agent.system_prompt())
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .build();

        debug!(
            agent = %config.name,
            agent_key = ?context.agent_key(),
            step = ?context.step(),
            model = %config.model.name,
            "Requesting completion"
        );

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| Error::ProcessingFailed(format!("{}: {e}", config.name)))?;

        debug!(agent = %config.name, tokens = response.usage.total(), "Completion received");

        response
            .message
            .text()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::ProcessingFailed(format!("{}: model returned an empty response", config.name))
            })
    }

    fn name(&self) -> &str {
        self.agent.name()
    }
}
