//! Step outcome model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result value a collaborator must return for an operation to count as successful
pub const SUCCESS_MARKER: &str = "success";

/// Check a collaborator result against the success marker
///
/// Only an exact match counts. Empty strings, other casing, and error
/// descriptions are all failures.
pub fn is_success(result: &str) -> bool {
    result == SUCCESS_MARKER
}

/// Three-valued result of evaluating a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The step ran and reported success
    Succeeded,
    /// The step ran and reported anything other than success
    Failed,
    /// The step had nothing to do; the pipeline proceeds as if it passed
    Skipped,
}

impl Outcome {
    /// Map a collaborator success signal to Succeeded or Failed
    pub fn from_success(succeeded: bool) -> Self {
        if succeeded {
            Outcome::Succeeded
        } else {
            Outcome::Failed
        }
    }

    /// Whether the pipeline may move on to the next step
    pub fn should_continue(self) -> bool {
        match self {
            Outcome::Succeeded | Outcome::Skipped => true,
            Outcome::Failed => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_marker_exact_match() {
        assert!(is_success("success"));
        assert!(!is_success("Success"));
        assert!(!is_success("success "));
        assert!(!is_success(""));
        assert!(!is_success("error: command timed out"));
    }

    #[test]
    fn test_should_continue() {
        assert!(Outcome::Succeeded.should_continue());
        assert!(Outcome::Skipped.should_continue());
        assert!(!Outcome::Failed.should_continue());
    }

    #[test]
    fn test_from_success() {
        assert_eq!(Outcome::from_success(true), Outcome::Succeeded);
        assert_eq!(Outcome::from_success(false), Outcome::Failed);
    }

    #[test]
    fn test_outcome_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&Outcome::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
        let decoded: Outcome = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(decoded, Outcome::Failed);
    }

    #[test]
    fn test_unknown_outcome_tag_is_rejected() {
        let decoded: Result<Outcome, _> = serde_json::from_str("\"pending\"");
        assert!(decoded.is_err());
    }
}
