//! llm-guard: justification-gated policy check for restricted shell commands.
//!
//! ```text
//! llm-guard --config <config.toml> --cmd <command> --justify <justification>
//! ```
//!
//! Prints exactly one decision line to stdout and exits with:
//! 0 = allowed (for any reason), 1 = denied by the judge, 2 = usage error.

use std::path::PathBuf;

use clap::Parser;

use llm_guard::{gate, judge};

/// Command-line arguments. All three flags are required; clap reports
/// missing ones on stderr and exits with code 2 before anything else runs.
#[derive(Debug, Parser)]
#[command(name = "llm-guard")]
#[command(about = "Justification-gated policy check for restricted shell commands")]
#[command(version)]
struct Args {
    /// The full restricted command being executed.
    #[arg(long)]
    cmd: String,

    /// The user-provided justification for the command.
    #[arg(long)]
    justify: String,

    /// Path to the guard config file.
    #[arg(long)]
    config: PathBuf,
}

fn main() {
    let args = Args::parse();
    init_logging();

    let outcome = gate::run(&args.cmd, &args.justify, &args.config, judge::backend_for);
    println!("{}", outcome.message());
    std::process::exit(outcome.exit_code());
}

/// Route `log` diagnostics to stderr. Off unless `LLM_GUARD_LOG` is set
/// (e.g. `LLM_GUARD_LOG=debug`); the decision line itself goes to stdout
/// unconditionally.
fn init_logging() {
    let level = std::env::var("LLM_GUARD_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Off);
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Never,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn all_flags_parse() {
        let args = Args::try_parse_from([
            "llm-guard",
            "--config",
            "/etc/guard.toml",
            "--cmd",
            "rm -rf ./build",
            "--justify",
            "cleaning stale artifacts",
        ])
        .unwrap();
        assert_eq!(args.cmd, "rm -rf ./build");
        assert_eq!(args.justify, "cleaning stale artifacts");
        assert_eq!(args.config, PathBuf::from("/etc/guard.toml"));
    }

    #[test]
    fn missing_cmd_is_usage_error() {
        let err = Args::try_parse_from([
            "llm-guard",
            "--config",
            "/etc/guard.toml",
            "--justify",
            "why",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_justify_is_usage_error() {
        let err =
            Args::try_parse_from(["llm-guard", "--config", "/etc/guard.toml", "--cmd", "ls"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_config_is_usage_error() {
        let err = Args::try_parse_from(["llm-guard", "--cmd", "ls", "--justify", "why"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_args_is_usage_error() {
        let err = Args::try_parse_from(["llm-guard"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn usage_error_names_missing_flags() {
        let err = Args::try_parse_from(["llm-guard"]).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("--cmd"));
        assert!(rendered.contains("--justify"));
        assert!(rendered.contains("--config"));
    }
}
