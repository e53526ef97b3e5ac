use crate::models::Cliente;
use crate::utils::errors::{is_unique_violation, AppError, AppResult};
use chrono::Utc;
use sqlx::SqlitePool;

pub struct ClienteRepository {
    pool: SqlitePool,
}

impl ClienteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta un cliente nuevo
    ///
    /// El índice único de RFC convierte el duplicado en Conflict.
    pub async fn create(&self, cliente: &Cliente) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clientes (id, nombre, telefono, direccion, codigo_postal, rfc, sexo, fecha_nacimiento, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&cliente.id)
        .bind(&cliente.nombre)
        .bind(&cliente.telefono)
        .bind(&cliente.direccion)
        .bind(&cliente.codigo_postal)
        .bind(&cliente.rfc)
        .bind(cliente.sexo)
        .bind(&cliente.fecha_nacimiento)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("El RFC ya está registrado".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(clientes)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn rfc_exists(&self, rfc: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clientes WHERE rfc = ?1)")
                .bind(rfc)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
