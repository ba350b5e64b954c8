//! Driving port for registry mutations.

use async_trait::async_trait;

use crate::domain::{Age, Error, User, UserId, Username};

/// Domain use-case port for creating, updating and deleting users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user. Fails with `invalid_request` on an id collision.
    async fn create_user(&self, user: User) -> Result<User, Error>;

    /// Replace the profile of an existing user. Fails with `not_found`.
    async fn update_user(&self, id: UserId, username: Username, age: Age) -> Result<User, Error>;

    /// Remove a user and return the removed record. Fails with `not_found`.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
