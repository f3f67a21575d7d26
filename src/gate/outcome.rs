/// Why the gate allowed a command without a DENY from the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowSource {
    /// `!override!` bypass in the justification.
    Override,
    /// Judge disabled in configuration.
    Disabled,
    /// Infrastructure failure resolved by the fail-open policy.
    FailOpen,
    /// Explicit ALLOW from the LLM judge.
    Judge,
}

/// Terminal result of the decision pipeline.
///
/// Every pipeline stage either produces an `Outcome` or hands off to the next
/// stage; there are no other ways out. The exit-code mapping is part of the
/// CLI contract: 0 = allowed for any reason, 1 = denied by the judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Allowed { source: AllowSource, detail: String },
    Denied { detail: String },
}

impl Outcome {
    /// An ALLOW produced by the fail-open policy rather than a real decision.
    pub fn fail_open(detail: impl Into<String>) -> Self {
        Outcome::Allowed {
            source: AllowSource::FailOpen,
            detail: detail.into(),
        }
    }

    pub fn allowed(&self) -> bool {
        matches!(self, Outcome::Allowed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Allowed { .. } => 0,
            Outcome::Denied { .. } => 1,
        }
    }

    /// The single stdout line for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::Allowed {
                source: AllowSource::Override,
                ..
            } => "ALLOWED by override pattern detected.".into(),
            Outcome::Allowed {
                source: AllowSource::Disabled,
                ..
            } => "ALLOWED by configuration (LLM judge disabled).".into(),
            Outcome::Allowed {
                source: AllowSource::FailOpen,
                detail,
            } => format!("ALLOWED by fail-open policy: {detail}"),
            Outcome::Allowed {
                source: AllowSource::Judge,
                detail,
            } => format!("ALLOWED by LLM Guard: {detail}"),
            Outcome::Denied { detail } => format!("REJECTED by LLM Guard: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_outcomes_exit_zero() {
        for source in [
            AllowSource::Override,
            AllowSource::Disabled,
            AllowSource::FailOpen,
            AllowSource::Judge,
        ] {
            let outcome = Outcome::Allowed {
                source,
                detail: String::new(),
            };
            assert!(outcome.allowed());
            assert_eq!(outcome.exit_code(), 0);
        }
    }

    #[test]
    fn denied_exits_one() {
        let outcome = Outcome::Denied {
            detail: "too vague".into(),
        };
        assert!(!outcome.allowed());
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn override_message() {
        let outcome = Outcome::Allowed {
            source: AllowSource::Override,
            detail: String::new(),
        };
        assert_eq!(outcome.message(), "ALLOWED by override pattern detected.");
    }

    #[test]
    fn disabled_message() {
        let outcome = Outcome::Allowed {
            source: AllowSource::Disabled,
            detail: String::new(),
        };
        assert_eq!(
            outcome.message(),
            "ALLOWED by configuration (LLM judge disabled)."
        );
    }

    #[test]
    fn fail_open_message_carries_detail() {
        let outcome = Outcome::fail_open("config unavailable");
        assert_eq!(
            outcome.message(),
            "ALLOWED by fail-open policy: config unavailable"
        );
    }

    #[test]
    fn judge_messages_carry_reasoning() {
        let allowed = Outcome::Allowed {
            source: AllowSource::Judge,
            detail: "Seems reasonable.".into(),
        };
        assert_eq!(allowed.message(), "ALLOWED by LLM Guard: Seems reasonable.");

        let denied = Outcome::Denied {
            detail: "Justification is vague.".into(),
        };
        assert_eq!(
            denied.message(),
            "REJECTED by LLM Guard: Justification is vague."
        );
    }

    #[test]
    fn messages_are_single_line() {
        let outcome = Outcome::fail_open("judge unavailable");
        assert!(!outcome.message().contains('\n'));
    }
}
