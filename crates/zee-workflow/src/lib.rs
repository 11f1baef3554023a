//! Multi-agent workflows for zee-rs
//!
//! A [`ZeeWorkflow`] bundles a set of agent descriptors with a description of
//! what the agents should produce together. A [`WorkflowRunner`] executes it
//! and returns a [`WorkflowResult`].

pub mod agent;
pub mod provider;
pub mod runner;
pub mod workflow;

// Re-export for convenience
pub use agent::{BoundAgent, LlmAgent};
pub use provider::{EnvProviderFactory, ProviderFactory};
pub use runner::{RunnerConfig, StepOutput, WorkflowResult, WorkflowRunner, ZeeRunner};
pub use workflow::{WorkflowBuilder, ZeeWorkflow};
