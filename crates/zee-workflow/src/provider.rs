//! Resolving model providers for agents
//!
//! Agents only name a provider and a model. Turning that into a live client
//! (and reading the credential it needs) happens here, at run time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use zee_core::{Error, ModelConfig, ModelProvider, Result};
use zee_llm::LLMProvider;
use zee_llm::providers::{AnthropicProvider, OpenAIProvider};

/// Creates the provider an agent's model lives behind
#[cfg_attr(test, mockall::automock)]
pub trait ProviderFactory: Send + Sync {
    /// Return a provider able to serve `model`
    fn provider_for(&self, model: &ModelConfig) -> Result<Arc<dyn LLMProvider>>;
}

/// Factory reading credentials from process environment
///
/// - `OPEN_AI`: `OPENAI_API_KEY`, optional `OPENAI_API_BASE`
/// - `ANTHROPIC`: `ANTHROPIC_API_KEY`
///
/// One client is created per provider and reused for every agent using it.
#[derive(Default)]
pub struct EnvProviderFactory {
    cache: Mutex<HashMap<ModelProvider, Arc<dyn LLMProvider>>>,
}

impl EnvProviderFactory {
    /// Create a factory with an empty client cache
    pub fn new() -> Self {
        Self::default()
    }

    fn create(provider: ModelProvider) -> Result<Arc<dyn LLMProvider>> {
        let created: Arc<dyn LLMProvider> = match provider {
            ModelProvider::OpenAi => {
                Arc::new(OpenAIProvider::from_env().map_err(|e| unavailable(provider, e))?)
            }
            ModelProvider::Anthropic => {
                Arc::new(AnthropicProvider::from_env().map_err(|e| unavailable(provider, e))?)
            }
        };
        Ok(created)
    }
}

fn unavailable(provider: ModelProvider, err: zee_llm::LLMError) -> Error {
    Error::ProviderUnavailable(format!("{provider}: {err}"))
}

impl ProviderFactory for EnvProviderFactory {
    fn provider_for(&self, model: &ModelConfig) -> Result<Arc<dyn LLMProvider>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| Error::Generic("provider cache lock poisoned".to_string()))?;

        if let Some(existing) = cache.get(&model.provider) {
            return Ok(Arc::clone(existing));
        }

        debug!(provider = %model.provider, "Creating model provider from environment");
        let created = Self::create(model.provider)?;
        cache.insert(model.provider, Arc::clone(&created));
        Ok(created)
    }
}
