//! llm-guard: a justification-gated policy check for restricted shell commands.
//!
//! Invoked before a restricted command runs, with the command text and the
//! operator's justification. Decides ALLOW or DENY, optionally consulting an
//! LLM judge. Every infrastructure failure fails open: the gate is advisory,
//! not authoritative, whenever its external dependencies degrade. The only
//! negative outcome is an explicit DENY from the judge (exit code 1).
//!
//! # Architecture
//!
//! - **[`config`]** — TOML config loading for the judge connection.
//! - **[`gate`]** — Decision pipeline: override bypass, fail-open policy, outcome types.
//! - **[`judge`]** — LLM judge: prompt construction, provider backends, response parsing.

/// Configuration types and loading.
pub mod config;
/// Decision pipeline and outcome types.
pub mod gate;
/// LLM judge client, provider backends, response parsing.
pub mod judge;
