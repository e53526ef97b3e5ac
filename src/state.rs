//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    /// Directorio donde se guardan las imágenes subidas
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let uploads_dir = PathBuf::from(&config.uploads_dir);
        Self {
            pool,
            config,
            uploads_dir,
        }
    }
}
