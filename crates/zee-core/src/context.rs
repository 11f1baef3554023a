//! Execution context for agents
//!
//! The `Context` struct is a key-value store the workflow runner uses to hand
//! run-level information (workflow description, expected output, current
//! step) to agents during execution.

use std::collections::HashMap;

/// Well-known context keys
pub mod keys {
    /// Free-text description of the running workflow
    pub const WORKFLOW_DESCRIPTION: &str = "workflow_description";
    /// Expected output declared by the workflow
    pub const EXPECTED_OUTPUT: &str = "expected_output";
    /// Key of the agent currently running
    pub const AGENT_KEY: &str = "agent_key";
    /// Zero-based index of the current step
    pub const STEP: &str = "step";
}

/// Context passed to agents during execution
///
/// # Example
///
/// ```
/// use zee_core::Context;
///
/// let ctx = Context::new()
///     .with_workflow_description("A workflow of agents that do stuff together")
///     .with_expected_output("Just bunch of stuff");
///
/// assert_eq!(ctx.expected_output(), Some("Just bunch of stuff"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, serde_json::Value>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    // =========== Builder Methods ===========

    /// Set the workflow description
    pub fn with_workflow_description(mut self, description: impl Into<String>) -> Self {
        self.insert(keys::WORKFLOW_DESCRIPTION, serde_json::json!(description.into()));
        self
    }

    /// Set the expected output
    pub fn with_expected_output(mut self, output: impl Into<String>) -> Self {
        self.insert(keys::EXPECTED_OUTPUT, serde_json::json!(output.into()));
        self
    }

    // =========== Common Accessors ===========

    /// Get the workflow description
    pub fn workflow_description(&self) -> Option<&str> {
        self.get(keys::WORKFLOW_DESCRIPTION).and_then(|v| v.as_str())
    }

    /// Get the expected output
    pub fn expected_output(&self) -> Option<&str> {
        self.get(keys::EXPECTED_OUTPUT).and_then(|v| v.as_str())
    }

    /// Get the key of the agent currently running
    pub fn agent_key(&self) -> Option<&str> {
        self.get(keys::AGENT_KEY).and_then(|v| v.as_str())
    }

    /// Get the current step index
    pub fn step(&self) -> Option<usize> {
        self.get(keys::STEP)
            .and_then(serde_json::Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
    }

    /// Mark the start of a step
    pub fn enter_step(&mut self, step: usize, agent_key: impl Into<String>) {
        self.insert(keys::STEP, serde_json::json!(step));
        self.insert(keys::AGENT_KEY, serde_json::json!(agent_key.into()));
    }

    // =========== Storage ===========

    /// Insert a value into the context
    fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a value from the context
    fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_fields() {
        let ctx = Context::new()
            .with_workflow_description("do stuff")
            .with_expected_output("stuff");

        assert_eq!(ctx.workflow_description(), Some("do stuff"));
        assert_eq!(ctx.expected_output(), Some("stuff"));
        assert!(ctx.agent_key().is_none());
    }

    #[test]
    fn test_enter_step() {
        let mut ctx = Context::new();
        assert!(ctx.step().is_none());

        ctx.enter_step(0, "agent1");
        assert_eq!(ctx.step(), Some(0));
        assert_eq!(ctx.agent_key(), Some("agent1"));

        ctx.enter_step(1, "agent2");
        assert_eq!(ctx.step(), Some(1));
        assert_eq!(ctx.agent_key(), Some("agent2"));
    }
}
