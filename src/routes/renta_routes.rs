use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::controllers::renta_controller::RentaController;
use crate::dto::renta_dto::{CrearRentaRequest, RentaCreadaResponse};
use crate::models::Renta;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_renta_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_renta))
        .route("/", get(list_rentas))
}

async fn create_renta(
    State(state): State<AppState>,
    Json(request): Json<CrearRentaRequest>,
) -> Result<Json<RentaCreadaResponse>, AppError> {
    info!("📥 Datos de renta recibidos");

    let controller = RentaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_rentas(State(state): State<AppState>) -> Result<Json<Vec<Renta>>, AppError> {
    let controller = RentaController::new(state.pool.clone());
    let rentas = controller.list().await?;
    Ok(Json(rentas))
}
