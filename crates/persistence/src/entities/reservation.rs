//! Reservation entity (database row mapping).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Reservation, ReservationStatus};

/// Database row mapping for the reservations table.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationEntity {
    pub id: i64,
    pub reservation_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReservationEntity> for Reservation {
    fn from(entity: ReservationEntity) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            mobile_number: entity.mobile_number,
            reservation_date: entity.reservation_date,
            reservation_time: entity.reservation_time,
            people: entity.people,
            // The status column is CHECK-constrained to the four known values.
            status: ReservationStatus::parse(&entity.status).unwrap_or(ReservationStatus::Booked),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_entity(status: &str) -> ReservationEntity {
        ReservationEntity {
            id: 7,
            reservation_id: Uuid::new_v4(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            mobile_number: "555-000-1111".to_string(),
            reservation_date: NaiveDate::from_ymd_opt(2031, 4, 9).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            people: 2,
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_entity_to_domain() {
        let entity = test_entity("seated");
        let reservation: Reservation = entity.clone().into();

        assert_eq!(reservation.id, entity.id);
        assert_eq!(reservation.reservation_id, entity.reservation_id);
        assert_eq!(reservation.first_name, entity.first_name);
        assert_eq!(reservation.reservation_date, entity.reservation_date);
        assert_eq!(reservation.reservation_time, entity.reservation_time);
        assert_eq!(reservation.people, entity.people);
        assert_eq!(reservation.status, ReservationStatus::Seated);
    }

    #[test]
    fn test_entity_status_strings() {
        for (raw, status) in [
            ("booked", ReservationStatus::Booked),
            ("seated", ReservationStatus::Seated),
            ("finished", ReservationStatus::Finished),
            ("cancelled", ReservationStatus::Cancelled),
        ] {
            let reservation: Reservation = test_entity(raw).into();
            assert_eq!(reservation.status, status);
        }
    }
}
