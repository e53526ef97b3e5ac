use axum::{
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info};

use crate::controllers::carro_controller::CarroController;
use crate::dto::carro_dto::{CarroCreadoResponse, CarroForm};
use crate::models::Carro;
use crate::services::ImageStorage;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_carro_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_carro))
        .route("/", get(list_carros))
}

/// Alta de carro vía formulario multipart
///
/// La imagen se guarda en disco antes de insertar el registro; el campo
/// `estado` del formulario se descarta porque el alta siempre produce
/// un carro Disponible.
async fn create_carro(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CarroCreadoResponse>, AppError> {
    info!("📥 Alta de carro recibida");

    let storage = ImageStorage::new(state.uploads_dir.clone());
    let mut form = CarroForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(format!("Error al leer el formulario: {}", e)))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if name == "imagen" {
            let original = field.file_name().unwrap_or("imagen").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Internal(format!("Error al leer la imagen: {}", e)))?;

            if !data.is_empty() {
                debug!("📸 Imagen recibida: {} ({} bytes)", original, data.len());
                form.imagen = Some(storage.save(&original, &data).await?);
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Internal(format!("Error al leer el formulario: {}", e)))?;

        match name.as_str() {
            "matricula" => form.matricula = Some(value),
            "marca" => form.marca = Some(value),
            "modelo" => form.modelo = Some(value),
            "color" => form.color = Some(value),
            "precio" => form.precio = Some(value),
            "descripcion" => form.descripcion = Some(value),
            _ => {}
        }
    }

    let controller = CarroController::new(state.pool.clone());
    let response = controller.create(form).await?;
    Ok(Json(response))
}

/// Listado completo de carros
///
/// Los query params se ignoran; el cliente móvil filtra por estado o
/// matrícula de su lado.
async fn list_carros(State(state): State<AppState>) -> Result<Json<Vec<Carro>>, AppError> {
    let controller = CarroController::new(state.pool.clone());
    let carros = controller.list().await?;
    Ok(Json(carros))
}
