//! Registry-backed implementation of the user driving ports.
//!
//! Translates [`UserRegistryError`] into transport-agnostic [`Error`]
//! values so inbound adapters only ever see stable error codes.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::ports::{UserRegistry, UserRegistryError, UsersCommand, UsersQuery};
use crate::domain::{Age, Error, User, UserId, Username};

fn map_registry_error(err: UserRegistryError) -> Error {
    match err {
        UserRegistryError::DuplicateId { id } => {
            debug!(user_id = %id, "rejected duplicate user id");
            Error::invalid_request(format!("user with id {id} already exists")).with_details(
                json!({ "field": "id", "code": "duplicate_id", "value": id.get() }),
            )
        }
        UserRegistryError::NotFound { id } => {
            debug!(user_id = %id, "user not found");
            Error::not_found(format!("user with id {id} not found")).with_details(
                json!({ "field": "id", "code": "user_not_found", "value": id.get() }),
            )
        }
        UserRegistryError::Unavailable { message } => {
            error!(%message, "user registry unavailable");
            Error::internal(format!("user registry unavailable: {message}"))
        }
    }
}

/// Domain service exposing the registry through the driving ports.
pub struct UserRegistryService<R: ?Sized> {
    registry: Arc<R>,
}

impl<R: ?Sized> UserRegistryService<R> {
    /// Wrap a registry adapter.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

impl<R: ?Sized> Clone for UserRegistryService<R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserRegistryService<R>
where
    R: UserRegistry + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.registry.list_all().await.map_err(map_registry_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserRegistryService<R>
where
    R: UserRegistry + ?Sized,
{
    async fn create_user(&self, user: User) -> Result<User, Error> {
        let created = self.registry.create(user).await.map_err(map_registry_error)?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update_user(&self, id: UserId, username: Username, age: Age) -> Result<User, Error> {
        let updated = self
            .registry
            .update_by_id(id, username, age)
            .await
            .map_err(map_registry_error)?;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .registry
            .delete_by_id(id)
            .await
            .map_err(map_registry_error)?;
        info!(user_id = %id, "user deleted");
        Ok(removed)
    }
}
