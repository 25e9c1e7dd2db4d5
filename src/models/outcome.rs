use serde::Serialize;

/// The uniform result shape every adapter call produces.
///
/// Exactly one of the two variants holds: either the raw exchange payload is
/// passed through untouched, or the failure was normalized into an
/// `{"error": message}` descriptor. Execution failures are data, not errors;
/// callers inspect the outcome instead of catching anything.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum OrderOutcome {
    Error { error: String },
    Success(serde_json::Value),
}

impl OrderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderOutcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OrderOutcome::Error { .. })
    }

    /// The normalized failure message, if this outcome is an error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            OrderOutcome::Error { error } => Some(error),
            OrderOutcome::Success(_) => None,
        }
    }

    /// The raw exchange payload, if this outcome is a success.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            OrderOutcome::Success(payload) => Some(payload),
            OrderOutcome::Error { .. } => None,
        }
    }
}
