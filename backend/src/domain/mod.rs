//! Domain primitives, ports and services.
//!
//! Purpose: Define strongly typed domain entities and the use-case ports the
//! inbound adapters drive. Types here stay free of HTTP concerns; adapters
//! translate them at the edge.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, UserId, Username, Age: registry record and its validated parts.
//! - TraceId: request correlation identifier.
//! - UserRegistryService: driving-port implementation over a registry.

pub mod error;
pub mod ports;
pub mod registry_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registry_service::UserRegistryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, AGE_MIN, Age, USERNAME_MAX, USERNAME_MIN, User, UserId, UserValidationError,
    Username,
};
