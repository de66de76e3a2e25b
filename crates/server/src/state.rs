use crate::{config::Config, templates::Templates};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub templates: Arc<Templates>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Result<Self, minijinja::Error> {
        Ok(Self {
            db,
            templates: Arc::new(Templates::new()?),
            config: Arc::new(config),
        })
    }
}
