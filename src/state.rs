use crate::config::Config;
use crate::pantry::PantryClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pantry_client: PantryClient,
    pub config: Arc<Config>,
}
