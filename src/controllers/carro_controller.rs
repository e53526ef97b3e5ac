use crate::dto::carro_dto::{CarroCreadoResponse, CarroForm};
use crate::models::{Carro, EstadoCarro};
use crate::repositories::carro_repository::CarroRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

pub struct CarroController {
    repository: CarroRepository,
}

impl CarroController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CarroRepository::new(pool),
        }
    }

    pub async fn create(&self, form: CarroForm) -> Result<CarroCreadoResponse, AppError> {
        // Validar campos obligatorios
        let (matricula, marca, modelo) = match form.datos_obligatorios() {
            Some((matricula, marca, modelo)) => (
                matricula.to_string(),
                marca.to_string(),
                modelo.to_string(),
            ),
            None => {
                return Err(AppError::BadRequest("Faltan datos obligatorios".to_string()));
            }
        };

        // Verificar que la matrícula no exista
        if self.repository.matricula_exists(&matricula).await? {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        // El estado siempre nace Disponible: un carro recién dado de alta
        // no puede tener rentas, venga lo que venga en el formulario.
        let carro = Carro {
            id: Uuid::new_v4().to_string(),
            matricula,
            marca,
            modelo,
            color: form.color,
            precio: form.precio,
            descripcion: form.descripcion,
            estado: EstadoCarro::Disponible,
            imagen: form.imagen,
        };

        self.repository.create(&carro).await?;

        info!("✅ Carro agregado: {} {} ({})", carro.marca, carro.modelo, carro.matricula);

        Ok(CarroCreadoResponse {
            mensaje: "Carro agregado correctamente".to_string(),
            carro_id: carro.id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Carro>, AppError> {
        self.repository.list_all().await
    }
}
