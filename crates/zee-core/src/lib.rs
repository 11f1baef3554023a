//! Core abstractions for zee-rs
//!
//! This crate defines the agent descriptor types and the fundamental traits
//! used throughout the zee-rs workspace.

pub mod agent;
pub mod config;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use config::{AgentConfig, ModelConfig, ModelProvider};
pub use context::Context;
pub use error::{Error, Result};
