use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from reading or parsing the guard config file.
///
/// Neither variant blocks the gated command: the gate resolves both to a
/// fail-open ALLOW. Configuration problems must never block execution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level config document. A single `[llm]` section; a file that parses
/// but omits it behaves as judge-disabled.
#[derive(Debug, Deserialize, Default)]
pub struct GuardConfig {
    #[serde(default)]
    pub llm: LlmSettings,
}

/// Judge connection settings.
#[derive(Debug, Deserialize, Default)]
pub struct LlmSettings {
    /// Turns the LLM judge on or off.
    #[serde(default)]
    pub enabled: bool,
    /// Text-generation backend name ("openai", "anthropic", "groq", "ollama").
    #[serde(default)]
    pub provider: String,
    /// Model identifier passed to the backend.
    #[serde(default)]
    pub model: String,
    /// Credential for the backend.
    #[serde(default)]
    pub token: String,
}

impl GuardConfig {
    /// Read and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
