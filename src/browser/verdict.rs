extern crate serde;

use serde::Deserialize;
use std::fmt;

/// The judge's outcome vocabulary for one submission. Values the API may
/// grow later decode as `Unknown` and classify as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ok,
    Failed,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Failed => "FAILED",
            Verdict::Partial => "PARTIAL",
            Verdict::CompilationError => "COMPILATION_ERROR",
            Verdict::RuntimeError => "RUNTIME_ERROR",
            Verdict::WrongAnswer => "WRONG_ANSWER",
            Verdict::PresentationError => "PRESENTATION_ERROR",
            Verdict::TimeLimitExceeded => "TIME_LIMIT_EXCEEDED",
            Verdict::MemoryLimitExceeded => "MEMORY_LIMIT_EXCEEDED",
            Verdict::IdlenessLimitExceeded => "IDLENESS_LIMIT_EXCEEDED",
            Verdict::SecurityViolated => "SECURITY_VIOLATED",
            Verdict::Crashed => "CRASHED",
            Verdict::InputPreparationCrashed => "INPUT_PREPARATION_CRASHED",
            Verdict::Challenged => "CHALLENGED",
            Verdict::Skipped => "SKIPPED",
            Verdict::Testing => "TESTING",
            Verdict::Rejected => "REJECTED",
            Verdict::Unknown => "UNKNOWN",
        }
    }
    /// Everything except an accepted or partial result counts as a
    /// failing attempt.
    pub fn is_negative(self) -> bool {
        !matches!(self, Verdict::Ok | Verdict::Partial)
    }
}
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a problem's latest verdict. `Unattempted` is the
/// distinct no-submission state, not a verdict value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictClass {
    Accepted,
    Partial,
    Negative,
    Unattempted,
}

pub fn classify(verdict: Option<Verdict>) -> VerdictClass {
    match verdict {
        None => VerdictClass::Unattempted,
        Some(Verdict::Ok) => VerdictClass::Accepted,
        Some(Verdict::Partial) => VerdictClass::Partial,
        Some(_) => VerdictClass::Negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::from_str::<Verdict>(r#""OK""#).unwrap(), Verdict::Ok);
        assert_eq!(
            serde_json::from_str::<Verdict>(r#""WRONG_ANSWER""#).unwrap(),
            Verdict::WrongAnswer
        );
        assert_eq!(
            serde_json::from_str::<Verdict>(r#""INPUT_PREPARATION_CRASHED""#).unwrap(),
            Verdict::InputPreparationCrashed
        );
    }

    #[test]
    fn future_verdicts_decode_fail_closed() {
        let v = serde_json::from_str::<Verdict>(r#""SOME_FUTURE_VERDICT""#).unwrap();
        assert_eq!(v, Verdict::Unknown);
        assert!(v.is_negative());
        assert_eq!(classify(Some(v)), VerdictClass::Negative);
    }

    #[test]
    fn negative_set() {
        assert!(!Verdict::Ok.is_negative());
        assert!(Verdict::WrongAnswer.is_negative());
        assert!(Verdict::Testing.is_negative());
        assert!(Verdict::Challenged.is_negative());
        assert!(!Verdict::Partial.is_negative());
    }

    #[test]
    fn classify_is_total() {
        assert_eq!(classify(None), VerdictClass::Unattempted);
        assert_eq!(classify(Some(Verdict::Ok)), VerdictClass::Accepted);
        assert_eq!(classify(Some(Verdict::Partial)), VerdictClass::Partial);
        assert_eq!(classify(Some(Verdict::TimeLimitExceeded)), VerdictClass::Negative);
        assert_eq!(classify(Some(Verdict::Skipped)), VerdictClass::Negative);
    }
}
