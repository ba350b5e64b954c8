//! Driven port for the ordered user registry and its errors.
//!
//! The registry owns the collection of users for the lifetime of the
//! process. Implementations must make each operation atomic with respect to
//! the others so the create-time uniqueness check cannot race.

use async_trait::async_trait;

use crate::domain::{Age, User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user registry adapters.
    pub enum UserRegistryError {
        /// A record with the same identifier is already stored.
        DuplicateId { id: UserId } => "user {id} already exists",
        /// No record matches the identifier.
        NotFound { id: UserId } => "user {id} not found",
        /// The backing store cannot serve requests.
        Unavailable { message: String } => "user registry unavailable: {message}",
    }
}

/// Ordered collection of users with id-based lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Snapshot every record in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, UserRegistryError>;

    /// Append `user` unless its identifier is already present.
    async fn create(&self, user: User) -> Result<User, UserRegistryError>;

    /// Replace username and age of the first record matching `id`.
    ///
    /// The record keeps its identifier and position.
    async fn update_by_id(
        &self,
        id: UserId,
        username: Username,
        age: Age,
    ) -> Result<User, UserRegistryError>;

    /// Remove the first record matching `id` and return it.
    async fn delete_by_id(&self, id: UserId) -> Result<User, UserRegistryError>;
}
