//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS abierto
///
/// El cliente móvil llega desde direcciones cambiantes de la red local,
/// así que el servidor acepta cualquier origen.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
