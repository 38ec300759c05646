//! Dining table endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{ReservationRepository, TableRepository};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::metrics::{record_table_finished, record_table_seated};
use crate::routes::Data;
use domain::models::reservation::Reservation;
use domain::models::table::{CreateTableRequest, DiningTable, SeatTableRequest, TableResponse};
use domain::models::ReservationStatus;

/// List all tables, ordered by name.
///
/// GET /tables
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Data<Vec<TableResponse>>>, ApiError> {
    let repo = TableRepository::new(state.pool.clone());
    let entities = repo.list_all().await?;

    let data = entities
        .into_iter()
        .map(|e| {
            let t: DiningTable = e.into();
            t.into()
        })
        .collect();

    Ok(Json(Data { data }))
}

/// Create a new table.
///
/// POST /tables
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<Data<CreateTableRequest>>,
) -> Result<(StatusCode, Json<Data<TableResponse>>), ApiError> {
    let request = body.data;
    request.validate()?;

    let repo = TableRepository::new(state.pool.clone());
    let entity = repo.create(&request.table_name, request.capacity).await?;

    let table: DiningTable = entity.into();
    info!(table_id = %table.table_id, name = %table.table_name, "Table created");

    Ok((
        StatusCode::CREATED,
        Json(Data { data: table.into() }),
    ))
}

/// Seat a reservation at a table.
///
/// Links the table to the reservation and marks the reservation seated
/// in one transaction; a failure of either write rolls back both.
///
/// PUT /tables/:table_id/seat
pub async fn seat(
    State(state): State<AppState>,
    Path(table_id): Path<Uuid>,
    AppJson(body): AppJson<Data<SeatTableRequest>>,
) -> Result<Json<Data<TableResponse>>, ApiError> {
    let table_repo = TableRepository::new(state.pool.clone());
    let reservation_repo = ReservationRepository::new(state.pool.clone());

    let table = load_table(&table_repo, table_id).await?;

    let reservation_id = body.data.reservation_id;
    let reservation: Reservation = reservation_repo
        .find_by_reservation_id(reservation_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Reservation {} not found", reservation_id))
        })?
        .into();

    if reservation.status == ReservationStatus::Seated {
        return Err(ApiError::Validation(
            "reservation is already seated".to_string(),
        ));
    }

    if table.is_occupied() {
        return Err(ApiError::Validation(format!(
            "table {} is occupied",
            table.table_name
        )));
    }

    if table.capacity < reservation.people {
        return Err(ApiError::Validation(format!(
            "table capacity ({}) is smaller than the party size ({})",
            table.capacity, reservation.people
        )));
    }

    let entity = table_repo.seat(table_id, reservation_id).await?;

    record_table_seated();

    let table: DiningTable = entity.into();
    info!(
        table_id = %table.table_id,
        reservation_id = %reservation_id,
        "Reservation seated"
    );

    Ok(Json(Data { data: table.into() }))
}

/// Free a table, marking its reservation finished.
///
/// Symmetric to seating: both writes commit in one transaction.
///
/// DELETE /tables/:table_id/seat
pub async fn finish(
    State(state): State<AppState>,
    Path(table_id): Path<Uuid>,
) -> Result<Json<Data<TableResponse>>, ApiError> {
    let repo = TableRepository::new(state.pool.clone());
    let table = load_table(&repo, table_id).await?;

    let Some(reservation_id) = table.reservation_id else {
        return Err(ApiError::Validation(format!(
            "table {} is not occupied",
            table.table_name
        )));
    };

    let entity = repo.finish(table_id, reservation_id).await?;

    record_table_finished();

    let table: DiningTable = entity.into();
    info!(
        table_id = %table.table_id,
        reservation_id = %reservation_id,
        "Table finished"
    );

    Ok(Json(Data { data: table.into() }))
}

async fn load_table(repo: &TableRepository, table_id: Uuid) -> Result<DiningTable, ApiError> {
    let entity = repo
        .find_by_table_id(table_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Table {} not found", table_id)))?;
    Ok(entity.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_request_envelope() {
        let body: Data<SeatTableRequest> = serde_json::from_str(
            r#"{"data": {"reservation_id": "550e8400-e29b-41d4-a716-446655440000"}}"#,
        )
        .unwrap();
        assert_eq!(
            body.data.reservation_id.to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_create_table_envelope() {
        let body: Data<CreateTableRequest> =
            serde_json::from_str(r#"{"data": {"table_name": "A1", "capacity": 2}}"#).unwrap();
        assert_eq!(body.data.table_name, "A1");
        assert_eq!(body.data.capacity, 2);
        assert!(body.data.validate().is_ok());
    }
}
