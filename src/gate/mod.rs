//! Decision pipeline: override bypass, config gate, judge hand-off.
//!
//! Control flows strictly top to bottom. Each stage either produces a
//! terminal [`Outcome`] or passes control to the next stage. Every
//! infrastructure failure along the way resolves to a fail-open ALLOW;
//! the only DENY comes from an explicit judge decision.

pub mod outcome;

pub use outcome::{AllowSource, Outcome};

use std::path::Path;

use crate::config::{GuardConfig, LlmSettings};
use crate::judge::{Judge, JudgeDecision, ProviderError, TextGenerator};

/// Literal justification prefix that bypasses the entire pipeline,
/// config loading included.
pub const OVERRIDE_PREFIX: &str = "!override!";

/// True when the justification requests the manual override bypass.
///
/// Presence of the prefix (after trimming surrounding whitespace) is
/// sufficient; nothing after it is validated.
pub fn override_requested(justification: &str) -> bool {
    justification.trim().starts_with(OVERRIDE_PREFIX)
}

/// Run the full decision pipeline for one invocation.
///
/// `make_backend` defers provider construction until the gate policy has
/// decided a judge call is actually needed, so disabled or misconfigured
/// judges never touch the network. Tests substitute a mock here.
pub fn run<F>(command: &str, justification: &str, config_path: &Path, make_backend: F) -> Outcome
where
    F: FnOnce(&LlmSettings) -> Result<Box<dyn TextGenerator>, ProviderError>,
{
    if override_requested(justification) {
        return Outcome::Allowed {
            source: AllowSource::Override,
            detail: String::new(),
        };
    }

    let config = match GuardConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            diagnostic(&e.to_string());
            return Outcome::fail_open("config unavailable");
        }
    };

    let llm = &config.llm;
    if !llm.enabled {
        return Outcome::Allowed {
            source: AllowSource::Disabled,
            detail: String::new(),
        };
    }
    if llm.provider.is_empty() || llm.token.is_empty() {
        diagnostic("missing LLM token or provider in config");
        return Outcome::fail_open("missing provider or token");
    }

    let backend = match make_backend(llm) {
        Ok(backend) => backend,
        Err(e) => {
            diagnostic(&e.to_string());
            return Outcome::fail_open("provider init failed");
        }
    };

    log::debug!("consulting {} judge (model {:?})", llm.provider, llm.model);
    match Judge::new(backend).review(command, justification) {
        Ok(response) => match response.decision {
            JudgeDecision::Deny => Outcome::Denied {
                detail: response.reasoning,
            },
            JudgeDecision::Allow => Outcome::Allowed {
                source: AllowSource::Judge,
                detail: response.reasoning,
            },
            JudgeDecision::Unknown => {
                // Allow-biased parse: an off-script first line counts as ALLOW.
                log::warn!("judge response did not start with ALLOW or DENY");
                Outcome::Allowed {
                    source: AllowSource::Judge,
                    detail: response.reasoning,
                }
            }
        },
        Err(e) => {
            diagnostic(&e.to_string());
            let detail = match e {
                ProviderError::Empty => "empty judge response",
                _ => "judge unavailable",
            };
            Outcome::fail_open(detail)
        }
    }
}

/// Stderr diagnostic for a failure the gate is about to fail open on.
fn diagnostic(msg: &str) {
    log::debug!("fail-open: {msg}");
    eprintln!("llm-guard: {msg}");
}
