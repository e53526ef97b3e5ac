//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen valores por defecto para poder arrancar sin `.env`.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub uploads_dir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://rentcar.db".to_string()),
            uploads_dir: env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_combina_host_y_puerto() {
        let config = EnvironmentConfig {
            port: 3000,
            host: "127.0.0.1".to_string(),
            database_url: "sqlite://rentcar.db".to_string(),
            uploads_dir: "uploads".to_string(),
        };
        assert_eq!(config.server_url(), "127.0.0.1:3000");
    }
}
