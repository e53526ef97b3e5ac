use crate::dto::cliente_dto::{ClienteCreadoResponse, RfcExisteResponse};
use crate::dto::CrearClienteRequest;
use crate::models::Cliente;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CrearClienteRequest) -> Result<ClienteCreadoResponse, AppError> {
        // Validar campos obligatorios
        let (nombre, telefono) = match request.datos_obligatorios() {
            Some((nombre, telefono)) => (nombre.to_string(), telefono.to_string()),
            None => {
                return Err(AppError::BadRequest("Faltan datos obligatorios".to_string()));
            }
        };

        // RFC vacío se guarda como NULL para que el índice único
        // no trate dos clientes sin RFC como duplicados.
        let rfc = request.rfc.filter(|r| !r.is_empty());

        let cliente = Cliente {
            id: Uuid::new_v4().to_string(),
            nombre,
            telefono,
            direccion: request.direccion,
            codigo_postal: request.codigo_postal,
            rfc,
            sexo: request.sexo,
            fecha_nacimiento: request.fecha_nacimiento,
        };

        self.repository.create(&cliente).await?;

        info!("✅ Cliente agregado: {}", cliente.nombre);

        Ok(ClienteCreadoResponse {
            mensaje: "Cliente agregado correctamente".to_string(),
            cliente_id: cliente.id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Cliente>, AppError> {
        self.repository.list_all().await
    }

    /// Verificación de RFC del formulario de registro
    ///
    /// Sin parámetro o con cadena vacía responde `exists: false`, igual
    /// que una búsqueda de un RFC que nadie tiene.
    pub async fn rfc_exists(&self, rfc: Option<String>) -> Result<RfcExisteResponse, AppError> {
        let exists = match rfc.as_deref().filter(|r| !r.is_empty()) {
            Some(rfc) => self.repository.rfc_exists(rfc).await?,
            None => false,
        };

        Ok(RfcExisteResponse { exists })
    }
}
