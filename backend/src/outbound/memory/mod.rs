//! In-memory user registry.
//!
//! Records live in a `Vec` so insertion order is the listing order. A single
//! mutex serialises every operation, which makes the duplicate check in
//! [`UserRegistry::create`] and the find-then-mutate of update and delete
//! atomic under actix's multi-threaded workers. Nothing awaits while the
//! guard is held.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserRegistry, UserRegistryError};
use crate::domain::{Age, User, UserId, Username};

/// Process-local registry. Contents are lost on restart.
///
/// # Examples
/// ```
/// use user_registry::domain::User;
/// use user_registry::domain::ports::UserRegistry;
/// use user_registry::outbound::memory::InMemoryUserRegistry;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let registry = InMemoryUserRegistry::new();
/// let user = User::try_from_parts(1, "UrbanUser", 24).expect("valid user");
/// registry.create(user.clone()).await.expect("created");
/// assert_eq!(registry.list_all().await.expect("listed"), vec![user]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRegistry {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRegistryError> {
        self.users.lock().map_err(|err| {
            error!(error = %err, "user registry mutex poisoned");
            UserRegistryError::unavailable("registry lock poisoned")
        })
    }
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn list_all(&self) -> Result<Vec<User>, UserRegistryError> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, user: User) -> Result<User, UserRegistryError> {
        let mut users = self.lock()?;
        if users.iter().any(|existing| existing.id() == user.id()) {
            return Err(UserRegistryError::duplicate_id(user.id()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update_by_id(
        &self,
        id: UserId,
        username: Username,
        age: Age,
    ) -> Result<User, UserRegistryError> {
        let mut users = self.lock()?;
        let user = users
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| UserRegistryError::not_found(id))?;
        user.update_profile(username, age);
        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<User, UserRegistryError> {
        let mut users = self.lock()?;
        let index = users
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| UserRegistryError::not_found(id))?;
        Ok(users.remove(index))
    }
}
