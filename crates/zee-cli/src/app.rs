//! The workflow this binary runs and how its result is printed

use anyhow::Context as _;
use std::io::Write;
use zee_core::{AgentConfig, ModelConfig};
use zee_workflow::{LlmAgent, WorkflowRunner, ZeeWorkflow};

const MODEL: &str = "gpt-4o-mini";
const AGENT_DESCRIPTION: &str = "A helpful AI assistant that can engage in conversation.";
const WORKFLOW_DESCRIPTION: &str = "A workflow of agents that do stuff together";
const WORKFLOW_OUTPUT: &str = "Just bunch of stuff";

/// How the result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The result content, verbatim
    Text,
    /// The full result as pretty JSON
    Json,
}

fn agent(name: &str) -> LlmAgent {
    LlmAgent::new(AgentConfig::new(
        name,
        ModelConfig::openai(MODEL),
        AGENT_DESCRIPTION,
    ))
}

/// Two conversational agents sharing one model
pub fn build_workflow() -> zee_core::Result<ZeeWorkflow> {
    ZeeWorkflow::builder()
        .description(WORKFLOW_DESCRIPTION)
        .output(WORKFLOW_OUTPUT)
        .add_agent("agent1", agent("Agent1"))
        .add_agent("agent2", agent("Agent2"))
        .build()
}

/// Run `workflow` once and write the result to `out`
///
/// Nothing is written when the run fails.
pub async fn execute<R, W>(
    runner: &R,
    workflow: &ZeeWorkflow,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: WorkflowRunner + ?Sized,
    W: Write,
{
    let result = runner.run(workflow).await.context("Workflow run failed")?;

    match format {
        OutputFormat::Text => writeln!(out, "{result}")?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use zee_core::Error;
    use zee_workflow::WorkflowResult;

    mock! {
        Runner {}

        #[async_trait]
        impl WorkflowRunner for Runner {
            async fn run(&self, workflow: &ZeeWorkflow) -> zee_core::Result<WorkflowResult>;
        }
    }

    #[test]
    fn test_workflow_has_both_agents() {
        let workflow = build_workflow().unwrap();

        assert_eq!(workflow.agent_count(), 2);
        assert_eq!(workflow.description(), WORKFLOW_DESCRIPTION);
        assert_eq!(workflow.output(), WORKFLOW_OUTPUT);

        let agent1 = workflow.agent("agent1").unwrap().config();
        let agent2 = workflow.agent("agent2").unwrap().config();
        assert_eq!(agent1.name, "Agent1");
        assert_eq!(agent2.name, "Agent2");
        assert_eq!(agent1.model, agent2.model);
        assert_eq!(agent1.model.provider.as_str(), "OPEN_AI");
        assert_eq!(agent1.description, agent2.description);
    }

    #[tokio::test]
    async fn test_result_printed_exactly_once() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(WorkflowResult::from_content("Just bunch of stuff")));

        let workflow = build_workflow().unwrap();
        let mut out = Vec::new();
        execute(&runner, &workflow, OutputFormat::Text, &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Just bunch of stuff").count(), 1);
        assert_eq!(printed, "Just bunch of stuff\n");
    }

    #[tokio::test]
    async fn test_failure_prints_nothing() {
        let mut runner = MockRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(Error::ProviderUnavailable(
                "OPEN_AI: OPENAI_API_KEY environment variable not set".to_string(),
            ))
        });

        let workflow = build_workflow().unwrap();
        let mut out = Vec::new();
        let err = execute(&runner, &workflow, OutputFormat::Text, &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn test_json_output() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(WorkflowResult::from_content("stuff")));

        let workflow = build_workflow().unwrap();
        let mut out = Vec::new();
        execute(&runner, &workflow, OutputFormat::Json, &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["content"], "stuff");
        assert!(value["steps"].as_array().unwrap().is_empty());
    }
}
