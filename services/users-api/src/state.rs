//! Application state shared across handlers

use common::ServerConfig;

use crate::repositories::UserRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(user_repository: UserRepository, config: ServerConfig) -> Self {
        Self {
            user_repository,
            config,
        }
    }
}
