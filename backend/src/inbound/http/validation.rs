//! Request validation for inbound HTTP adapters.
//!
//! Every shape or range failure is rejected with `validation_failed` (422)
//! before a registry operation runs. This covers malformed JSON bodies,
//! unparsable path segments and query strings (via the extractor error
//! handlers registered in [`configure_extractors`]) as well as the username
//! and age bounds enforced by the domain constructors.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId, UserValidationError};

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailCode {
    InvalidBody,
    InvalidPath,
    InvalidQuery,
    UsernameTooShort,
    UsernameTooLong,
    AgeOutOfRange,
    NegativeId,
}

impl DetailCode {
    fn as_str(self) -> &'static str {
        match self {
            DetailCode::InvalidBody => "invalid_body",
            DetailCode::InvalidPath => "invalid_path",
            DetailCode::InvalidQuery => "invalid_query",
            DetailCode::UsernameTooShort => "username_too_short",
            DetailCode::UsernameTooLong => "username_too_long",
            DetailCode::AgeOutOfRange => "age_out_of_range",
            DetailCode::NegativeId => "negative_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const USERNAME: FieldName = FieldName::new("username");
pub(crate) const AGE: FieldName = FieldName::new("age");

fn field_error(field: FieldName, code: DetailCode, message: impl Into<String>) -> Error {
    Error::validation_failed(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn payload_error(code: DetailCode, message: String) -> Error {
    debug!(code = code.as_str(), %message, "rejected malformed request");
    Error::validation_failed(message).with_details(json!({ "code": code.as_str() }))
}

/// Map a domain construction failure onto a field-scoped 422.
pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    let message = err.to_string();
    match err {
        UserValidationError::UsernameTooShort { min } => Error::validation_failed(message)
            .with_details(json!({
                "field": USERNAME.as_str(),
                "code": DetailCode::UsernameTooShort.as_str(),
                "min": min,
            })),
        UserValidationError::UsernameTooLong { max } => Error::validation_failed(message)
            .with_details(json!({
                "field": USERNAME.as_str(),
                "code": DetailCode::UsernameTooLong.as_str(),
                "max": max,
            })),
        UserValidationError::AgeOutOfRange { min, max } => Error::validation_failed(message)
            .with_details(json!({
                "field": AGE.as_str(),
                "code": DetailCode::AgeOutOfRange.as_str(),
                "min": min,
                "max": max,
            })),
    }
}

/// Accept a user identifier only when it is non-negative.
///
/// Applies to body and path identifiers alike, so every stored record stays
/// addressable by `PUT`/`DELETE /user/{id}`.
pub(crate) fn parse_user_id(raw: i64) -> Result<UserId, Error> {
    if raw < 0 {
        return Err(field_error(
            ID,
            DetailCode::NegativeId,
            "id must be greater than or equal to 0",
        ));
    }
    Ok(UserId::new(raw))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error(DetailCode::InvalidBody, err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    payload_error(DetailCode::InvalidPath, err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error(DetailCode::InvalidQuery, err.to_string()).into()
}

/// Route extractor failures through the shared error envelope.
///
/// Without these handlers Actix answers bad JSON with a plain-text 400 and
/// bad path segments with 404.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}
