//! Agent descriptor types
//!
//! An agent is described by a name, the model it talks to, and a free-text
//! description of what it does. These types carry no behavior of their own;
//! the workflow crate turns them into runnable agents.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model service an agent talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelProvider {
    /// OpenAI chat completions
    #[serde(rename = "OPEN_AI")]
    OpenAi,
    /// Anthropic messages API
    #[serde(rename = "ANTHROPIC")]
    Anthropic,
}

impl ModelProvider {
    /// Wire name of the provider (e.g. `"OPEN_AI"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPEN_AI",
            Self::Anthropic => "ANTHROPIC",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OPEN_AI" => Ok(Self::OpenAi),
            "ANTHROPIC" => Ok(Self::Anthropic),
            other => Err(Error::InvalidConfig(format!(
                "Unknown model provider: {other}"
            ))),
        }
    }
}

/// Model reference: provider plus provider-specific model name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model provider
    pub provider: ModelProvider,
    /// Model identifier (e.g. "gpt-4o-mini")
    pub name: String,
}

impl ModelConfig {
    /// Create a new model reference
    pub fn new(provider: ModelProvider, name: impl Into<String>) -> Self {
        Self {
            provider,
            name: name.into(),
        }
    }

    /// Shorthand for an OpenAI model
    pub fn openai(name: impl Into<String>) -> Self {
        Self::new(ModelProvider::OpenAi, name)
    }

    /// Shorthand for an Anthropic model
    pub fn anthropic(name: impl Into<String>) -> Self {
        Self::new(ModelProvider::Anthropic, name)
    }
}

/// Agent descriptor
///
/// # Example
///
/// ```
/// use zee_core::{AgentConfig, ModelConfig};
///
/// let config = AgentConfig::new(
///     "Agent1",
///     ModelConfig::openai("gpt-4o-mini"),
///     "A helpful AI assistant that can engage in conversation.",
/// );
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent name
    pub name: String,
    /// Model the agent talks to
    pub model: ModelConfig,
    /// What the agent does
    pub description: String,
}

impl AgentConfig {
    /// Create a new agent descriptor
    pub fn new(name: impl Into<String>, model: ModelConfig, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model,
            description: description.into(),
        }
    }

    /// Check that the descriptor can be run
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("Agent name must not be empty".to_string()));
        }
        if self.model.name.trim().is_empty() {
            return Err(Error::InvalidConfig(format!(
                "Agent '{}' has an empty model name",
                self.name
            )));
        }
        Ok(())
    }
}
