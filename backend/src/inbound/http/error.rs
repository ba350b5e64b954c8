//! Rendering of domain errors as HTTP responses.
//!
//! Every failure leaves the service as the JSON envelope
//! `{code, message, traceId, details}`. The status is derived from
//! [`ErrorCode`]; internal failures are logged in full and sent with a fixed
//! message and no details.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

/// Result alias returned by every handler.
pub type ApiResult<T> = Result<T, Error>;

/// HTTP status carried by responses for `code`.
pub(crate) const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Envelope sent to the client for `err`.
fn wire_payload(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }

    error!(
        message = err.message(),
        trace_id = err.trace_id(),
        details = ?err.details(),
        "internal error redacted"
    );
    let redacted = Error::internal(REDACTED_MESSAGE);
    match err.trace_id() {
        Some(trace_id) => redacted.with_trace_id(trace_id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let payload = wire_payload(self);
        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = payload.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
        }
        response.json(payload)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to internal error");
        Error::internal(REDACTED_MESSAGE)
    }
}
