//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::CatalogStore;
use crate::config::Config;
use crate::web::token::TokenService;
use basket_core::ports::AccountStore;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub catalog: Arc<CatalogStore>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<Config>,
}
