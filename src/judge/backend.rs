//! Opaque text-generation capability consumed by the judge.

use thiserror::Error;

/// Options for a single generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Errors from provider construction or generation.
///
/// All of these fail open at the gate; none of them can block the command.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider name not recognized at construction time.
    #[error("unknown LLM provider: {0:?}")]
    Unknown(String),
    /// Backend could not be constructed from the given settings.
    #[error("failed to initialize LLM provider: {0}")]
    Init(String),
    /// Transport-level failure during the generation call.
    #[error("LLM generation failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status from the provider API.
    #[error("LLM generation failed: {provider} returned HTTP {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },
    /// Response decoded but carried no assistant text.
    #[error("empty response from LLM")]
    Empty,
}

/// A text-generation backend: one blocking call, raw text out.
///
/// Implementations make a single synchronous request with no retry and no
/// timeout beyond the HTTP client default.
pub trait TextGenerator: std::fmt::Debug {
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        opts: &GenOptions,
    ) -> Result<String, ProviderError>;
}
