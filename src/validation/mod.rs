//! Validation primitives shared by the model validators.
//!
//! Rules are pure functions that return a `Result` per check; outcomes
//! accumulate every violation instead of stopping at the first one, so a
//! client can fix all problems in a single round trip.

pub mod rules;

use serde::Serialize;

/// A single rule violation against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, code: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Accumulated result of running a rule set against one record.
///
/// Valid iff no violations were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the violation of a failed check; a passing check is a no-op.
    pub fn record(&mut self, check: Result<(), ValidationError>) {
        if let Err(error) = check {
            self.errors.push(error);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
