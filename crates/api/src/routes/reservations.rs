//! Reservation endpoint handlers.
//!
//! Each mutating handler runs its guards in a fixed order and stops at
//! the first failure: payload field checks, then business rules, then
//! the persistence call.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use persistence::repositories::ReservationRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::metrics::record_reservation_created;
use crate::routes::Data;
use domain::models::reservation::{
    ListReservationsQuery, Reservation, ReservationRequest, ReservationResponse,
    ReservationStatus, StatusUpdateRequest,
};

/// List reservations for a date, or search by phone number.
///
/// GET /reservations?date=YYYY-MM-DD
/// GET /reservations?mobile_number=...
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<Data<Vec<ReservationResponse>>>, ApiError> {
    let repo = ReservationRepository::new(state.pool.clone());

    let entities = if let Some(date) = query.date.as_deref() {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            ApiError::Validation("date must be a valid YYYY-MM-DD date".to_string())
        })?;
        repo.list_by_date(date, state.config.scheduling.hide_finished)
            .await?
    } else if let Some(mobile_number) = query.mobile_number.as_deref() {
        let digits = shared::validation::normalize_mobile_number(mobile_number);
        repo.search_by_mobile(&digits).await?
    } else {
        return Err(ApiError::Validation(
            "either a date or a mobile_number query parameter is required".to_string(),
        ));
    };

    let data = entities
        .into_iter()
        .map(|e| {
            let r: Reservation = e.into();
            r.into()
        })
        .collect();

    Ok(Json(Data { data }))
}

/// Create a new reservation.
///
/// POST /reservations
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<Data<ReservationRequest>>,
) -> Result<(StatusCode, Json<Data<ReservationResponse>>), ApiError> {
    let request = body.data;
    request.validate()?;
    check_status_on_create(&request)?;
    let (date, time) = checked_slot(&state, &request, Utc::now().naive_utc())?;

    let repo = ReservationRepository::new(state.pool.clone());
    let entity = repo
        .create(
            &request.first_name,
            &request.last_name,
            &request.mobile_number,
            date,
            time,
            request.people,
        )
        .await?;

    record_reservation_created();

    let reservation: Reservation = entity.into();
    info!(
        reservation_id = %reservation.reservation_id,
        date = %reservation.reservation_date,
        people = reservation.people,
        "Reservation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(Data {
            data: reservation.into(),
        }),
    ))
}

/// Get a single reservation by ID.
///
/// GET /reservations/:reservation_id
pub async fn read(
    State(state): State<AppState>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Json<Data<ReservationResponse>>, ApiError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let reservation = load_reservation(&repo, reservation_id).await?;

    Ok(Json(Data {
        data: reservation.into(),
    }))
}

/// Replace the editable fields of a reservation. The status is not
/// touched here; transitions go through the status endpoint.
///
/// PUT /reservations/:reservation_id
pub async fn update(
    State(state): State<AppState>,
    Path(reservation_id): Path<Uuid>,
    AppJson(body): AppJson<Data<ReservationRequest>>,
) -> Result<Json<Data<ReservationResponse>>, ApiError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let existing = load_reservation(&repo, reservation_id).await?;

    if existing.status == ReservationStatus::Finished {
        return Err(ApiError::Validation(
            "a finished reservation cannot be edited".to_string(),
        ));
    }

    let request = body.data;
    request.validate()?;
    let (date, time) = checked_slot(&state, &request, Utc::now().naive_utc())?;

    let entity = repo
        .update(
            reservation_id,
            &request.first_name,
            &request.last_name,
            &request.mobile_number,
            date,
            time,
            request.people,
        )
        .await?
        .ok_or_else(|| not_found(reservation_id))?;

    let reservation: Reservation = entity.into();
    info!(reservation_id = %reservation.reservation_id, "Reservation updated");

    Ok(Json(Data {
        data: reservation.into(),
    }))
}

/// Transition the status of a reservation.
///
/// PUT /reservations/:reservation_id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(reservation_id): Path<Uuid>,
    AppJson(body): AppJson<Data<StatusUpdateRequest>>,
) -> Result<Json<Data<ReservationResponse>>, ApiError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let existing = load_reservation(&repo, reservation_id).await?;

    let next = ReservationStatus::parse(&body.data.status).ok_or_else(|| {
        ApiError::Validation(format!("status '{}' is not valid", body.data.status))
    })?;

    if existing.status == ReservationStatus::Finished {
        return Err(ApiError::Validation(
            "a finished reservation cannot be updated".to_string(),
        ));
    }

    if !existing.status.can_transition_to(next) {
        return Err(ApiError::Validation(format!(
            "status cannot change from '{}' to '{}'",
            existing.status.as_str(),
            next.as_str()
        )));
    }

    let entity = repo
        .update_status(reservation_id, next.as_str())
        .await?
        .ok_or_else(|| not_found(reservation_id))?;

    let reservation: Reservation = entity.into();
    info!(
        reservation_id = %reservation.reservation_id,
        status = reservation.status.as_str(),
        "Reservation status updated"
    );

    Ok(Json(Data {
        data: reservation.into(),
    }))
}

async fn load_reservation(
    repo: &ReservationRepository,
    reservation_id: Uuid,
) -> Result<Reservation, ApiError> {
    let entity = repo
        .find_by_reservation_id(reservation_id)
        .await?
        .ok_or_else(|| not_found(reservation_id))?;
    Ok(entity.into())
}

fn not_found(reservation_id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Reservation {} not found", reservation_id))
}

/// Only `booked` (or no status at all) may be submitted at creation.
fn check_status_on_create(request: &ReservationRequest) -> Result<(), ApiError> {
    match request.status.as_deref() {
        None => Ok(()),
        Some(s) if ReservationStatus::parse(s) == Some(ReservationStatus::Booked) => Ok(()),
        Some(other) => Err(ApiError::Validation(format!(
            "a new reservation cannot have status '{}'",
            other
        ))),
    }
}

/// Parses the already-validated slot fields and checks them against the
/// schedule policy.
fn checked_slot(
    state: &AppState,
    request: &ReservationRequest,
    now: NaiveDateTime,
) -> Result<(NaiveDate, NaiveTime), ApiError> {
    let date = request.date().ok_or_else(|| {
        ApiError::Validation("reservation_date must be a valid YYYY-MM-DD date".to_string())
    })?;
    let time = request.time().ok_or_else(|| {
        ApiError::Validation("reservation_time must be a valid HH:MM time".to_string())
    })?;

    state
        .policy
        .check_slot(date, time, now)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    Ok((date, time))
}
