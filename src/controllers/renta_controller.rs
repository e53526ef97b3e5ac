use crate::dto::renta_dto::{CrearRentaRequest, RentaCreadaResponse};
use crate::models::{EstadoCarro, Renta};
use crate::repositories::carro_repository::CarroRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::renta_repository::RentaRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

/// Registro de rentas
///
/// Este controlador es el único camino que muta el estado de un carro.
/// La renta y la transición Disponible -> Rentado se confirman juntas o
/// no se confirma ninguna.
pub struct RentaController {
    pool: SqlitePool,
    carro_repository: CarroRepository,
    cliente_repository: ClienteRepository,
    renta_repository: RentaRepository,
}

impl RentaController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            carro_repository: CarroRepository::new(pool.clone()),
            cliente_repository: ClienteRepository::new(pool.clone()),
            renta_repository: RentaRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, request: CrearRentaRequest) -> Result<RentaCreadaResponse, AppError> {
        // Validar referencias obligatorias
        let (cliente_id, carro_id) = match request.referencias() {
            Some((cliente_id, carro_id)) => (cliente_id.to_string(), carro_id.to_string()),
            None => {
                return Err(AppError::BadRequest("Faltan datos obligatorios".to_string()));
            }
        };

        // Resolver las referencias antes de abrir la transacción
        self.cliente_repository
            .find_by_id(&cliente_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let carro = self
            .carro_repository
            .find_by_id(&carro_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Carro no encontrado".to_string()))?;

        if carro.estado != EstadoCarro::Disponible {
            return Err(AppError::Conflict("El carro no está disponible".to_string()));
        }

        let renta = Renta {
            id: Uuid::new_v4().to_string(),
            cliente_id,
            carro_id,
            precio: request.precio,
            fecha_inicio: request.fecha_inicio,
            fecha_fin: request.fecha_fin,
            total: request.total,
            forma_pago: request.forma_pago,
        };

        // La renta se inserta y el carro se marca en la misma transacción.
        // Si la transición condicional no toca filas (otra renta ganó la
        // carrera), el error suelta la transacción sin commit y el insert
        // se revierte con ella.
        let mut tx = self.pool.begin().await?;
        self.renta_repository.create(&mut tx, &renta).await?;
        self.carro_repository.marcar_rentado(&mut tx, &renta.carro_id).await?;
        tx.commit().await?;

        info!("🔄 Carro {} marcado como Rentado", renta.carro_id);
        info!("✅ Renta registrada: {}", renta.id);

        Ok(RentaCreadaResponse {
            mensaje: "Renta registrada correctamente".to_string(),
            renta_id: renta.id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Renta>, AppError> {
        self.renta_repository.list_all().await
    }
}
