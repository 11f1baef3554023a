//! Workflow definition

use crate::agent::LlmAgent;
use crate::runner::{WorkflowResult, WorkflowRunner, ZeeRunner};
use std::collections::BTreeMap;
use zee_core::{Error, Result};

/// A workflow of agents working toward a described output
///
/// Agents are keyed by name; the runner visits them in ascending key order.
/// Workflows are immutable once built.
///
/// # Example
///
/// ```
/// use zee_core::{AgentConfig, ModelConfig};
/// use zee_workflow::{LlmAgent, ZeeWorkflow};
///
/// # fn example() -> zee_core::Result<()> {
/// let agent = |name: &str| {
///     LlmAgent::new(AgentConfig::new(name, ModelConfig::openai("gpt-4o-mini"), "helper"))
/// };
///
/// let workflow = ZeeWorkflow::builder()
///     .description("A workflow of agents that do stuff together")
///     .output("Just bunch of stuff")
///     .add_agent("agent1", agent("Agent1"))
///     .add_agent("agent2", agent("Agent2"))
///     .build()?;
///
/// assert_eq!(workflow.agent_count(), 2);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ZeeWorkflow {
    description: String,
    output: String,
    agents: BTreeMap<String, LlmAgent>,
}

impl ZeeWorkflow {
    /// Create a new workflow builder
    pub fn builder() -> WorkflowBuilder {
        WorkflowBuilder::new()
    }

    /// Run a workflow with providers resolved from the environment
    pub async fn run(workflow: &ZeeWorkflow) -> Result<WorkflowResult> {
        ZeeRunner::from_env().run(workflow).await
    }

    /// What the workflow is for
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared shape of the expected output
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Agents in run order
    pub fn agents(&self) -> impl Iterator<Item = (&str, &LlmAgent)> {
        self.agents.iter().map(|(key, agent)| (key.as_str(), agent))
    }

    /// Look up an agent by key
    pub fn agent(&self, key: &str) -> Option<&LlmAgent> {
        self.agents.get(key)
    }

    /// Number of agents in the workflow
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

/// Builder for constructing workflows
#[derive(Debug, Default)]
pub struct WorkflowBuilder {
    description: String,
    output: String,
    agents: Vec<(String, LlmAgent)>,
}

impl WorkflowBuilder {
    /// Create a new workflow builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workflow description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the expected output
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Add an agent under `key`
    pub fn add_agent(mut self, key: impl Into<String>, agent: LlmAgent) -> Self {
        self.agents.push((key.into(), agent));
        self
    }

    /// Build the workflow
    ///
    /// Fails when the description is empty, there are no agents, a key is
    /// empty or used twice, or an agent descriptor is invalid.
    pub fn build(self) -> Result<ZeeWorkflow> {
        if self.description.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "Workflow description must not be empty".to_string(),
            ));
        }
        if self.agents.is_empty() {
            return Err(Error::InvalidConfig(
                "Workflow needs at least one agent".to_string(),
            ));
        }

        let mut agents = BTreeMap::new();
        for (key, agent) in self.agents {
            if key.trim().is_empty() {
                return Err(Error::InvalidConfig("Agent key must not be empty".to_string()));
            }
            agent.config().validate()?;
            if agents.contains_key(&key) {
                return Err(Error::InvalidConfig(format!("Duplicate agent key: {key}")));
            }
            agents.insert(key, agent);
        }

        Ok(ZeeWorkflow {
            description: self.description,
            output: self.output,
            agents,
        })
    }
}
