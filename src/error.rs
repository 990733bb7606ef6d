//! Service error type shared by every layer.
//!
//! Per-request failures are returned values, never panics. Field violations
//! travel inside the `Validation` kind so the HTTP layer can enumerate all of
//! them in a single 400 response.

use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{
    constants,
    validation::{ValidationError, ValidationOutcome},
};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Validation,
    NotFound,
    Conflict,
    InternalServerError,
}

/// Structured context attached to an error for logging and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    tag: Option<String>,
    detail: Option<String>,
    metadata: HashMap<String, String>,
}

impl ErrorContext {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
    context: ErrorContext,
    violations: Vec<ValidationError>,
}

impl ServiceError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
            violations: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// Wraps a failed validation outcome so the response carries every
    /// violation at once.
    pub fn validation_failed(outcome: ValidationOutcome) -> Self {
        let mut error = Self::new(ErrorKind::Validation, constants::MESSAGE_VALIDATION_FAILED);
        error.violations = outcome.into_errors();
        error
    }

    pub fn with_context<F>(mut self, build: F) -> Self
    where
        F: FnOnce(ErrorContext) -> ErrorContext,
    {
        self.context = build(self.context);
        self
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_context(|ctx| ctx.with_tag(tag))
    }

    pub fn with_detail(self, detail: impl Into<String>) -> Self {
        self.with_context(|ctx| ctx.with_detail(detail))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }
}

fn no_violations(errors: &&[ValidationError]) -> bool {
    errors.is_empty()
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "no_violations")]
    errors: &'a [ValidationError],
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::BadRequest | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: &self.message,
            errors: &self.violations,
        })
    }
}

/// Logs an error with the originating scope before propagating it.
pub trait LogErrorExt<T> {
    fn log_error(self, scope: &str) -> ServiceResult<T>;
}

impl<T> LogErrorExt<T> for ServiceResult<T> {
    fn log_error(self, scope: &str) -> ServiceResult<T> {
        if let Err(err) = &self {
            match err.context.detail() {
                Some(detail) => log::error!("{}: {} ({})", scope, err, detail),
                None => log::error!("{}: {}", scope, err),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::internal_server_error("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_failed_carries_all_violations() {
        let mut outcome = ValidationOutcome::new();
        outcome.push(ValidationError::new("firstName", "REQUIRED", "firstName is required"));
        outcome.push(ValidationError::new("email", "REQUIRED", "email is required"));

        let error = ServiceError::validation_failed(outcome);
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn test_context_enrichment() {
        let error = ServiceError::internal_server_error("boom")
            .with_context(|ctx| ctx.with_tag("db").with_detail("connection refused"));
        assert_eq!(error.context.tag(), Some("db"));
        assert_eq!(error.context.detail(), Some("connection refused"));
    }
}
