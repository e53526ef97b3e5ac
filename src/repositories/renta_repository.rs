use crate::models::Renta;
use crate::utils::errors::AppResult;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

pub struct RentaRepository {
    pool: SqlitePool,
}

impl RentaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta la renta dentro de la transacción del registro
    ///
    /// Es la primera escritura de la transacción, así que ésta toma el
    /// candado de escritura de SQLite desde el arranque.
    pub async fn create(&self, tx: &mut Transaction<'_, Sqlite>, renta: &Renta) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO rentas (id, cliente_id, carro_id, precio, fecha_inicio, fecha_fin, total, forma_pago, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&renta.id)
        .bind(&renta.cliente_id)
        .bind(&renta.carro_id)
        .bind(&renta.precio)
        .bind(&renta.fecha_inicio)
        .bind(&renta.fecha_fin)
        .bind(&renta.total)
        .bind(&renta.forma_pago)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Renta>> {
        let rentas = sqlx::query_as::<_, Renta>("SELECT * FROM rentas ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rentas)
    }
}
