//! Shared utilities for zee-rs
//!
//! This crate provides common functionality used across the zee-rs workspace,
//! including logging setup, `.env` loading, and process configuration.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, load_env_file};
pub use logging::init_tracing;
