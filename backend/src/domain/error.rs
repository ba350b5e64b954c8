//! Transport-neutral failure type returned by the driving ports.
//!
//! An [`Error`] carries a coarse [`ErrorCode`], a client-facing message, the
//! trace identifier of the request that raised it, and optional structured
//! details such as the offending field. Adapters decide how each code is
//! rendered; the HTTP adapter maps them to status codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Failure category shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Well-formed request that conflicts with stored state, such as a
    /// duplicate user id.
    InvalidRequest,
    /// No user matches the requested id.
    NotFound,
    /// Input failed shape or range checks.
    ValidationFailed,
    /// The registry could not serve the request.
    InternalError,
}

/// Reasons an [`Error`] cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

/// Failure payload returned by domain services.
///
/// Messages and trace identifiers are never blank. On the wire the payload
/// reads `{"code", "message", "traceId"?, "details"?}`.
///
/// # Examples
/// ```
/// use user_registry::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("user with id 7 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "user with id 7 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireError", into = "WireError")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

fn non_blank(value: String, err: ErrorValidationError) -> Result<String, ErrorValidationError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

impl Error {
    /// Build an error, binding the trace identifier of the current request
    /// when one is in scope.
    ///
    /// # Errors
    /// [`ErrorValidationError::EmptyMessage`] when `message` is blank.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = non_blank(message.into(), ErrorValidationError::EmptyMessage)?;
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Infallible form of [`Error::try_new`] for literal messages.
    ///
    /// # Panics
    /// Panics when `message` is blank.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|err| panic!("invalid {code:?} error: {err}"))
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier of the request that raised the error.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured context, e.g. `{"field": "age", "code": "age_out_of_range"}`.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the trace identifier.
    ///
    /// # Errors
    /// [`ErrorValidationError::EmptyTraceId`] when `trace_id` is blank.
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        self.trace_id = Some(non_blank(
            trace_id.into(),
            ErrorValidationError::EmptyTraceId,
        )?);
        Ok(self)
    }

    /// Infallible form of [`Error::try_with_trace_id`].
    ///
    /// # Panics
    /// Panics when `trace_id` is blank.
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        self.try_with_trace_id(trace_id)
            .unwrap_or_else(|err| panic!("invalid trace identifier: {err}"))
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use user_registry::domain::Error;
    ///
    /// let err = Error::invalid_request("user with id 1 already exists")
    ///     .with_details(json!({ "field": "id", "code": "duplicate_id" }));
    /// assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!("id")));
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Serialised shape of [`Error`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct WireError {
    code: ErrorCode,
    message: String,
    #[serde(default, alias = "trace_id", skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for WireError {
    fn from(err: Error) -> Self {
        let Error {
            code,
            message,
            trace_id,
            details,
        } = err;
        Self {
            code,
            message,
            trace_id,
            details,
        }
    }
}

impl TryFrom<WireError> for Error {
    type Error = ErrorValidationError;

    fn try_from(wire: WireError) -> Result<Self, Self::Error> {
        let trace_id = wire
            .trace_id
            .map(|id| non_blank(id, ErrorValidationError::EmptyTraceId))
            .transpose()?;
        Ok(Self {
            code: wire.code,
            message: non_blank(wire.message, ErrorValidationError::EmptyMessage)?,
            trace_id,
            details: wire.details,
        })
    }
}

#[cfg(test)]
mod tests;
