//! LLM judge: prompt construction, provider dispatch, response parsing.
//!
//! The judge makes exactly one blocking generation call per invocation and
//! parses the free-text response into a binary decision. Parsing is
//! allow-biased: only a first line starting with "DENY" (case-insensitive)
//! denies; everything else, malformed output included, allows.

/// Anthropic Messages API backend.
pub mod anthropic;
/// The `TextGenerator` capability trait and provider error taxonomy.
pub mod backend;
/// Chat-completions backend for OpenAI-compatible providers.
pub mod openai;

pub use backend::{GenOptions, ProviderError, TextGenerator};

use crate::config::LlmSettings;

use anthropic::AnthropicBackend;
use openai::{ChatCompletionsBackend, GROQ_URL, OLLAMA_URL, OPENAI_URL};

/// Fixed system prompt instructing strict binary ALLOW/DENY evaluation.
const SYSTEM_PROMPT: &str = r#"You are a strict security guard evaluating if a bash command should be allowed based on the user's justification.
If the justification is solid, clear, and makes sense for the command, ALLOW it.
If the command seems extremely destructive without good reason, or the justification is vague, weak, or nonsensical (like "doing stuff", "test", "because"), DENY it.

Your response MUST start with either exactly "ALLOW" or exactly "DENY" on the first line.
The second line should be a brief explanation of your decision (if DENY, state your concerns and propose to the user that they can bypass this by prepending "!override!" to their justification if they are absolutely sure)."#;

/// Sampling temperature. Low: the judge should be consistent, not creative.
const TEMPERATURE: f32 = 0.1;
/// Output token budget: one decision word plus a short explanation.
const MAX_TOKENS: u32 = 150;

/// Decision extracted from the first line of a judge response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeDecision {
    Allow,
    Deny,
    /// First line was neither ALLOW nor DENY; treated as ALLOW downstream.
    Unknown,
}

/// A parsed judge response: the decision plus the explanation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeResponse {
    pub decision: JudgeDecision,
    pub reasoning: String,
}

/// The judge client: wraps a [`TextGenerator`] and owns the prompt format.
pub struct Judge {
    backend: Box<dyn TextGenerator>,
}

impl Judge {
    pub fn new(backend: Box<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    /// Ask the backend to evaluate one command/justification pair.
    pub fn review(&self, command: &str, justification: &str) -> Result<JudgeResponse, ProviderError> {
        let user_prompt = format!(
            "Command to execute: `{command}`\nUser's proposed justification: \"{justification}\"\n\nDecision:"
        );
        let opts = GenOptions {
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let raw = self.backend.generate(SYSTEM_PROMPT, &user_prompt, &opts)?;
        if raw.trim().is_empty() {
            return Err(ProviderError::Empty);
        }
        log::debug!("judge raw response: {raw:?}");
        Ok(parse_response(&raw))
    }
}

/// Split a raw response into a decision line and a reasoning remainder.
///
/// The response is trimmed, then split at the first newline. The decision is
/// DENY only if the uppercased first line starts with the literal "DENY";
/// a first line starting with "ALLOW" is ALLOW, and anything else is Unknown.
/// The reasoning is the trimmed remainder after the first newline.
pub fn parse_response(raw: &str) -> JudgeResponse {
    let trimmed = raw.trim();
    let (first, rest) = match trimmed.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };

    let decision_word = first.trim().to_uppercase();
    let decision = if decision_word.starts_with("DENY") {
        JudgeDecision::Deny
    } else if decision_word.starts_with("ALLOW") {
        JudgeDecision::Allow
    } else {
        JudgeDecision::Unknown
    };

    JudgeResponse {
        decision,
        reasoning: rest.trim().to_string(),
    }
}

/// Construct the backend named by the config's `provider` field.
///
/// Unrecognized names are an initialization error, which fails open at
/// the gate like every other provider failure.
pub fn backend_for(settings: &LlmSettings) -> Result<Box<dyn TextGenerator>, ProviderError> {
    let model = settings.model.as_str();
    let token = settings.token.as_str();
    match settings.provider.as_str() {
        "openai" => Ok(Box::new(ChatCompletionsBackend::new(
            "openai", OPENAI_URL, model, token,
        )?)),
        "groq" => Ok(Box::new(ChatCompletionsBackend::new(
            "groq", GROQ_URL, model, token,
        )?)),
        "ollama" => Ok(Box::new(ChatCompletionsBackend::new(
            "ollama", OLLAMA_URL, model, token,
        )?)),
        "anthropic" => Ok(Box::new(AnthropicBackend::new(model, token)?)),
        other => Err(ProviderError::Unknown(other.to_string())),
    }
}
