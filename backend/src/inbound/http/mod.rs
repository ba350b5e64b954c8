//! HTTP inbound adapter exposing the registry as REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the users endpoints and the extractor error handlers.
///
/// Callers provide [`state::HttpState`] via `app_data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use user_registry::inbound::http::{configure, state::HttpState};
/// use user_registry::outbound::memory::InMemoryUserRegistry;
///
/// let state = HttpState::from_registry(Arc::new(InMemoryUserRegistry::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    validation::configure_extractors(cfg);
    cfg.service(users::list_users)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user);
}
