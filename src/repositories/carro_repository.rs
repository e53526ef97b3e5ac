use crate::models::Carro;
use crate::utils::errors::{is_unique_violation, AppError, AppResult};
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

pub struct CarroRepository {
    pool: SqlitePool,
}

impl CarroRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta un carro nuevo
    ///
    /// El índice único de matrícula convierte el duplicado en Conflict
    /// aunque dos altas lleguen al mismo tiempo.
    pub async fn create(&self, carro: &Carro) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO carros (id, matricula, marca, modelo, color, precio, descripcion, estado, imagen, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&carro.id)
        .bind(&carro.matricula)
        .bind(&carro.marca)
        .bind(&carro.modelo)
        .bind(&carro.color)
        .bind(&carro.precio)
        .bind(&carro.descripcion)
        .bind(carro.estado)
        .bind(&carro.imagen)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("La matrícula ya está registrada".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Carro>> {
        let carros = sqlx::query_as::<_, Carro>("SELECT * FROM carros ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(carros)
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Carro>> {
        let carro = sqlx::query_as::<_, Carro>("SELECT * FROM carros WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(carro)
    }

    pub async fn matricula_exists(&self, matricula: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM carros WHERE matricula = ?1)")
                .bind(matricula)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Transición condicional Disponible -> Rentado
    ///
    /// Corre dentro de la transacción de la renta. Si otra renta ganó la
    /// carrera el UPDATE no toca filas y la operación regresa Conflict;
    /// al soltar la transacción sin commit, el insert de la renta se
    /// revierte junto con ella.
    pub async fn marcar_rentado(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: &str,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE carros SET estado = 'Rentado' WHERE id = ?1 AND estado = 'Disponible'",
        )
        .bind(id)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict("El carro no está disponible".to_string()));
        }

        Ok(())
    }
}
