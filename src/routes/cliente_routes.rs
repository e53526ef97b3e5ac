use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{
    ClienteCreadoResponse, CrearClienteRequest, RfcExisteResponse, RfcQuery,
};
use crate::models::Cliente;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cliente))
        .route("/", get(list_clientes))
}

/// Router de la verificación de RFC
///
/// Vive en la raíz (`/rfc`) porque el formulario de registro lo consulta
/// antes de mandar el alta.
pub fn create_rfc_router() -> Router<AppState> {
    Router::new().route("/rfc", get(verificar_rfc))
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(request): Json<CrearClienteRequest>,
) -> Result<Json<ClienteCreadoResponse>, AppError> {
    info!("📥 Registro de cliente recibido");

    let controller = ClienteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_clientes(State(state): State<AppState>) -> Result<Json<Vec<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let clientes = controller.list().await?;
    Ok(Json(clientes))
}

async fn verificar_rfc(
    State(state): State<AppState>,
    Query(query): Query<RfcQuery>,
) -> Result<Json<RfcExisteResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.rfc_exists(query.rfc).await?;
    Ok(Json(response))
}
