//! utoipa stand-ins for the domain wire types.
//!
//! The domain never derives `ToSchema`. Each wrapper here mirrors the JSON
//! shape of one domain type and registers under the domain type's name via
//! `#[schema(as = ...)]`, so documents reference `crate.domain.User` rather
//! than the wrapper.

use utoipa::ToSchema;

/// Schema of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request conflicts with registry state (duplicate id).
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request failed shape or range validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The registry could not serve the request.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Schema of the error envelope, [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct ErrorSchema {
    /// Failure category.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Client-facing description.
    #[schema(example = "user with id 1 not found")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field.
    details: Option<serde_json::Value>,
}

/// Schema of a stored [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "fields are read by the ToSchema derive only"
)]
pub struct UserSchema {
    /// Caller-chosen identifier.
    #[schema(example = 1)]
    id: i64,
    /// Username, 5 to 20 characters.
    #[schema(example = "UrbanUser", min_length = 5, max_length = 20)]
    username: String,
    /// Age in years, 18 to 120.
    #[schema(example = 24, minimum = 18, maximum = 120)]
    age: i64,
}
