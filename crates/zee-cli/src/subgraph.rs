//! GraphQL queries against a The Graph subgraph
//!
//! The gateway authenticates with a bearer key read from `API_KEY` (usually
//! via `.env`). Only a `200 OK` counts as an answer; anything else is an
//! error carrying the response body.

use anyhow::{Context as _, bail};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Uniswap v3 subgraph on the decentralized gateway
pub const DEFAULT_SUBGRAPH_URL: &str = "https://gateway-arbitrum.network.thegraph.com/api/subgraphs/id/HUZDsRpEVP2AvzDCyzDHtdc64dyDxx8FQjzsmqSg4H3B";

/// Environment variable holding the gateway API key
pub const API_KEY_ENV: &str = "API_KEY";

/// Query sent when none is given
pub const DEFAULT_QUERY: &str = r"{
  factories(first: 5) {
    id
    poolCount
    txCount
    totalVolumeUSD
  }
  bundles(first: 5) {
    id
    ethPriceUSD
  }
}";

/// GraphQL request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}

impl GraphqlRequest {
    /// Create a request with no operation name or variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    /// Attach variables, parsed from a JSON object
    ///
    /// An empty object is dropped rather than sent.
    pub fn with_variables_json(mut self, raw: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("Variables are not valid JSON")?;
        let serde_json::Value::Object(map) = value else {
            bail!("Variables must be a JSON object");
        };
        self.variables = (!map.is_empty()).then_some(map);
        Ok(self)
    }
}

/// Client for a single subgraph endpoint
pub struct SubgraphClient {
    client: Client,
    url: String,
    api_key: String,
}

impl SubgraphClient {
    /// Create a client for `url`
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a client reading the key from `API_KEY`
    pub fn from_env(url: impl Into<String>) -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{API_KEY_ENV} environment variable not set"))?;
        Self::new(url, api_key)
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `request` and return the decoded response
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn query(&self, request: &GraphqlRequest) -> anyhow::Result<serde_json::Value> {
        debug!("Sending GraphQL query");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .context("Subgraph request failed")?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            bail!("Subgraph returned {status}: {body}");
        }

        let value = response
            .json()
            .await
            .context("Subgraph response is not valid JSON")?;
        info!("Subgraph query answered");
        Ok(value)
    }
}

/// Run `request` and write the pretty-printed response to `out`
///
/// Nothing is written when the query fails.
pub async fn execute<W: Write>(
    client: &SubgraphClient,
    request: &GraphqlRequest,
    out: &mut W,
) -> anyhow::Result<()> {
    let value = client.query(request).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    out.flush()?;
    Ok(())
}
