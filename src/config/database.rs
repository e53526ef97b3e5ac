//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.
//! El esquema se aplica al arrancar mediante migraciones embebidas.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Migraciones embebidas desde el directorio `migrations/`
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://rentcar.db".to_string()),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    /// Crear una configuración apuntando a una URL concreta
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Crear un nuevo pool de conexiones
    ///
    /// Activa WAL y llaves foráneas, crea el archivo si no existe
    /// y aplica las migraciones pendientes.
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

        Ok(pool)
    }
}
