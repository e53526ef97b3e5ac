//! API de renta de carros
//!
//! Servidor REST que persiste carros, clientes y rentas para el cliente
//! móvil. La única operación que cruza entidades es el registro de
//! rentas, que aparta el carro dentro de la misma transacción.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Las fotos del alta de carro pueden venir grandes desde el teléfono
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Arma el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/carros", routes::carro_routes::create_carro_router())
        .nest("/clientes", routes::cliente_routes::create_cliente_router())
        .nest("/rentas", routes::renta_routes::create_renta_router())
        .merge(routes::cliente_routes::create_rfc_router())
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check del servidor
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
