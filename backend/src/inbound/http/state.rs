//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without a real
//! registry.

use std::sync::Arc;

use crate::domain::UserRegistryService;
use crate::domain::ports::{UserRegistry, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_query: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Wire both driving ports to a single registry instance.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::memory::InMemoryUserRegistry;
    ///
    /// let state = HttpState::from_registry(Arc::new(InMemoryUserRegistry::new()));
    /// let _query = state.users_query.clone();
    /// ```
    pub fn from_registry<R>(registry: Arc<R>) -> Self
    where
        R: UserRegistry + ?Sized + 'static,
    {
        let service = UserRegistryService::new(registry);
        Self::new(Arc::new(service.clone()), Arc::new(service))
    }
}
