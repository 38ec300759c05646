//! Reservation repository for database operations.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReservationEntity;
use crate::metrics::QueryTimer;

/// Repository for reservation-related database operations.
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new reservation. The status column defaults to `booked`.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        mobile_number: &str,
        reservation_date: NaiveDate,
        reservation_time: NaiveTime,
        people: i32,
    ) -> Result<ReservationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_reservation");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            INSERT INTO reservations (first_name, last_name, mobile_number,
                                      reservation_date, reservation_time, people)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(mobile_number)
        .bind(reservation_date)
        .bind(reservation_time)
        .bind(people)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a reservation by its UUID.
    pub async fn find_by_reservation_id(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_reservation_by_id");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            SELECT * FROM reservations WHERE reservation_id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List reservations for a date, ordered by time of day.
    /// When `hide_finished` is set, finished reservations are left out.
    pub async fn list_by_date(
        &self,
        date: NaiveDate,
        hide_finished: bool,
    ) -> Result<Vec<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_reservations_by_date");
        let result = if hide_finished {
            sqlx::query_as::<_, ReservationEntity>(
                r#"
                SELECT * FROM reservations
                WHERE reservation_date = $1 AND status <> 'finished'
                ORDER BY reservation_time
                "#,
            )
            .bind(date)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, ReservationEntity>(
                r#"
                SELECT * FROM reservations
                WHERE reservation_date = $1
                ORDER BY reservation_time
                "#,
            )
            .bind(date)
            .fetch_all(&self.pool)
            .await
        };
        timer.record();
        result
    }

    /// Search reservations whose phone number contains the given digit
    /// sequence, ordered by date. Both sides of the comparison are reduced
    /// to digits, so formatting differences do not matter.
    ///
    /// `digits` must already be normalized (digits only).
    pub async fn search_by_mobile(
        &self,
        digits: &str,
    ) -> Result<Vec<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_reservations_by_mobile");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            SELECT * FROM reservations
            WHERE regexp_replace(mobile_number, '[^0-9]', '', 'g') LIKE $1
            ORDER BY reservation_date, reservation_time
            "#,
        )
        .bind(format!("%{}%", digits))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace the editable fields of a reservation. The status column is
    /// deliberately untouched; transitions go through `update_status`.
    pub async fn update(
        &self,
        reservation_id: Uuid,
        first_name: &str,
        last_name: &str,
        mobile_number: &str,
        reservation_date: NaiveDate,
        reservation_time: NaiveTime,
        people: i32,
    ) -> Result<Option<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_reservation");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            UPDATE reservations SET
                first_name = $2,
                last_name = $3,
                mobile_number = $4,
                reservation_date = $5,
                reservation_time = $6,
                people = $7,
                updated_at = NOW()
            WHERE reservation_id = $1
            RETURNING *
            "#,
        )
        .bind(reservation_id)
        .bind(first_name)
        .bind(last_name)
        .bind(mobile_number)
        .bind(reservation_date)
        .bind(reservation_time)
        .bind(people)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set the status of a reservation.
    pub async fn update_status(
        &self,
        reservation_id: Uuid,
        status: &str,
    ) -> Result<Option<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_reservation_status");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            UPDATE reservations SET status = $2, updated_at = NOW()
            WHERE reservation_id = $1
            RETURNING *
            "#,
        )
        .bind(reservation_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_repository_creation() {
        // Construction is covered by the integration tests, which run
        // against a real PostgreSQL instance.
    }
}
