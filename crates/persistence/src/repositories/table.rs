//! Dining table repository for database operations.
//!
//! Owns the two dual-write transitions of the system: seating links a
//! table to a reservation while marking it seated, finishing unlinks it
//! while marking it finished. Each pair of writes runs in one transaction
//! so readers never observe a half-applied transition.

use sqlx::PgPool;
use uuid::Uuid;

use domain::models::ReservationStatus;

use crate::entities::TableEntity;
use crate::metrics::QueryTimer;

/// Repository for table-related database operations.
#[derive(Clone)]
pub struct TableRepository {
    pool: PgPool,
}

impl TableRepository {
    /// Creates a new TableRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new table.
    pub async fn create(
        &self,
        table_name: &str,
        capacity: i32,
    ) -> Result<TableEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_table");
        let result = sqlx::query_as::<_, TableEntity>(
            r#"
            INSERT INTO tables (table_name, capacity)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(table_name)
        .bind(capacity)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a table by its UUID.
    pub async fn find_by_table_id(
        &self,
        table_id: Uuid,
    ) -> Result<Option<TableEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_table_by_id");
        let result = sqlx::query_as::<_, TableEntity>(
            r#"
            SELECT * FROM tables WHERE table_id = $1
            "#,
        )
        .bind(table_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all tables, ordered by name.
    pub async fn list_all(&self) -> Result<Vec<TableEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tables");
        let result = sqlx::query_as::<_, TableEntity>(
            r#"
            SELECT * FROM tables ORDER BY table_name
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Seat a reservation at a table: link the table to the reservation and
    /// mark the reservation seated, atomically.
    pub async fn seat(
        &self,
        table_id: Uuid,
        reservation_id: Uuid,
    ) -> Result<TableEntity, sqlx::Error> {
        let timer = QueryTimer::new("seat_table");

        // Both writes commit together or not at all.
        let mut tx = self.pool.begin().await?;

        let table = sqlx::query_as::<_, TableEntity>(
            r#"
            UPDATE tables SET reservation_id = $2, updated_at = NOW()
            WHERE table_id = $1
            RETURNING *
            "#,
        )
        .bind(table_id)
        .bind(reservation_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE reservations SET status = $2, updated_at = NOW()
            WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .bind(ReservationStatus::Seated.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(table)
    }

    /// Free a table: clear its reservation link and mark the reservation
    /// finished, atomically.
    pub async fn finish(
        &self,
        table_id: Uuid,
        reservation_id: Uuid,
    ) -> Result<TableEntity, sqlx::Error> {
        let timer = QueryTimer::new("finish_table");

        let mut tx = self.pool.begin().await?;

        let table = sqlx::query_as::<_, TableEntity>(
            r#"
            UPDATE tables SET reservation_id = NULL, updated_at = NOW()
            WHERE table_id = $1
            RETURNING *
            "#,
        )
        .bind(table_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE reservations SET status = $2, updated_at = NOW()
            WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .bind(ReservationStatus::Finished.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_repository_creation() {
        // Construction and the dual-write transactions are covered by the
        // integration tests, which run against a real PostgreSQL instance.
    }
}
