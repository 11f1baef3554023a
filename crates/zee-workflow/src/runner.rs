//! Workflow execution
//!
//! [`ZeeRunner`] runs the agents of a workflow one after another. The first
//! agent gets the task (description plus expected output); every following
//! agent gets the task plus the previous agent's contribution. The last
//! contribution is the workflow's result.

use crate::agent::BoundAgent;
use crate::provider::{EnvProviderFactory, ProviderFactory};
use crate::workflow::ZeeWorkflow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};
use zee_core::{Agent, Context, Error, Result};

/// Runs a workflow to completion
#[async_trait]
pub trait WorkflowRunner: Send + Sync {
    /// Execute every agent of `workflow` and return the combined result
    async fn run(&self, workflow: &ZeeWorkflow) -> Result<WorkflowResult>;
}

/// One agent's contribution to a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    /// Key the agent was registered under
    pub agent_key: String,
    /// Agent name
    pub agent_name: String,
    /// Text the agent produced
    pub output: String,
}

/// Outcome of a workflow run
///
/// `Display` writes `content` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Final output of the workflow
    pub content: String,
    /// Every contribution, in run order
    pub steps: Vec<StepOutput>,
}

impl WorkflowResult {
    /// Build a result with no recorded steps
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            steps: Vec::new(),
        }
    }
}

impl fmt::Display for WorkflowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Completion settings applied to every agent
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Max tokens per completion
    pub max_tokens: usize,

    /// Temperature for sampling
    pub temperature: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Sequential workflow runner backed by LLM providers
pub struct ZeeRunner {
    factory: Arc<dyn ProviderFactory>,
    config: RunnerConfig,
}

impl ZeeRunner {
    /// Create a runner resolving providers through `factory`
    pub fn new(factory: Arc<dyn ProviderFactory>) -> Self {
        Self {
            factory,
            config: RunnerConfig::default(),
        }
    }

    /// Create a runner reading provider credentials from the environment
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvProviderFactory::new()))
    }

    /// Set the completion settings
    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the completion settings
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Bind every agent to its provider before anything runs
    fn bind_agents(&self, workflow: &ZeeWorkflow) -> Result<Vec<(String, BoundAgent)>> {
        workflow
            .agents()
            .map(|(key, agent)| {
                let provider = self.factory.provider_for(&agent.config().model)?;
                Ok((key.to_string(), agent.bind(provider, &self.config)))
            })
            .collect()
    }
}

#[async_trait]
impl WorkflowRunner for ZeeRunner {
    #[instrument(skip_all, fields(agents = workflow.agent_count()))]
    async fn run(&self, workflow: &ZeeWorkflow) -> Result<WorkflowResult> {
        let agents = self.bind_agents(workflow)?;
        if agents.is_empty() {
            return Err(Error::InvalidConfig("Workflow has no agents".to_string()));
        }

        info!("Starting workflow: {}", workflow.description());

        let mut context = Context::new()
            .with_workflow_description(workflow.description())
            .with_expected_output(workflow.output());
        let task = task_prompt(&context);
        let mut steps: Vec<StepOutput> = Vec::with_capacity(agents.len());

        for (step, (key, agent)) in agents.into_iter().enumerate() {
            context.enter_step(step, key.as_str());
            let input = match steps.last() {
                None => task.clone(),
                Some(previous) => handoff_prompt(&task, previous),
            };

            info!(step, agent = agent.name(), "Running agent");
            let output = agent.process(input, &mut context).await?;

            steps.push(StepOutput {
                agent_key: key,
                agent_name: agent.name().to_string(),
                output,
            });
        }

        let content = steps
            .last()
            .map(|last| last.output.clone())
            .unwrap_or_default();

        info!(steps = steps.len(), "Workflow completed");
        Ok(WorkflowResult { content, steps })
    }
}

fn task_prompt(context: &Context) -> String {
    let description = context.workflow_description().unwrap_or_default();
    match context.expected_output().filter(|output| !output.trim().is_empty()) {
        Some(output) => format!("{description}\n\nExpected output: {output}"),
        None => description.to_string(),
    }
}

fn handoff_prompt(task: &str, previous: &StepOutput) -> String {
    format!(
        "{task}\n\n[From Agent] {}:\n{}",
        previous.agent_name, previous.output
    )
}
