//! Reservation domain model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a reservation.
///
/// Legal transitions: `booked -> seated`, `booked -> cancelled`,
/// `seated -> finished`. `finished` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "booked",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Finished => "finished",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "booked" => Some(ReservationStatus::Booked),
            "seated" => Some(ReservationStatus::Seated),
            "finished" => Some(ReservationStatus::Finished),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether no further transitions are possible out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Finished | ReservationStatus::Cancelled
        )
    }

    /// Whether the state machine permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Booked, ReservationStatus::Seated)
                | (ReservationStatus::Booked, ReservationStatus::Cancelled)
                | (ReservationStatus::Seated, ReservationStatus::Finished)
        )
    }
}

/// Represents a reservation for a party at a future date and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub reservation_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or fully updating a reservation.
///
/// Date and time arrive as strings so that shape failures surface as
/// field-level validation messages rather than body-decoding errors.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReservationRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    #[validate(custom(function = "shared::validation::validate_mobile_number"))]
    pub mobile_number: String,

    #[validate(custom(function = "shared::validation::validate_reservation_date"))]
    pub reservation_date: String,

    #[validate(custom(function = "shared::validation::validate_reservation_time"))]
    pub reservation_time: String,

    #[validate(range(min = 1, message = "people must be a number greater than 0"))]
    pub people: i32,

    /// Only `booked` (or nothing) may be submitted at creation.
    pub status: Option<String>,
}

impl ReservationRequest {
    /// The parsed calendar date, once field validation has passed.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.reservation_date, "%Y-%m-%d").ok()
    }

    /// The parsed wall-clock time, once field validation has passed.
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.reservation_time, "%H:%M").ok()
    }
}

/// Request payload for a status transition.
///
/// The status arrives as a string so that unknown values are reported
/// with a message naming the offending value.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Query parameters for listing reservations.
#[derive(Debug, Clone, Deserialize)]
pub struct ListReservationsQuery {
    pub date: Option<String>,
    pub mobile_number: Option<String>,
}

/// Response payload for reservation operations.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub reservation_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub people: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            reservation_id: r.reservation_id,
            first_name: r.first_name,
            last_name: r.last_name,
            mobile_number: r.mobile_number,
            reservation_date: r.reservation_date,
            reservation_time: r.reservation_time.format("%H:%M").to_string(),
            people: r.people,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Booked).unwrap(),
            "\"booked\""
        );
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_status_parse_round_trip() {
        for s in ["booked", "seated", "finished", "cancelled"] {
            let status = ReservationStatus::parse(s).unwrap();
            assert_eq!(status.as_str(), s);
        }
        assert_eq!(ReservationStatus::parse("unknown"), None);
        assert_eq!(ReservationStatus::parse("BOOKED"), None);
    }

    #[test]
    fn test_legal_transitions() {
        use ReservationStatus::*;
        assert!(Booked.can_transition_to(Seated));
        assert!(Booked.can_transition_to(Cancelled));
        assert!(Seated.can_transition_to(Finished));
    }

    #[test]
    fn test_illegal_transitions() {
        use ReservationStatus::*;
        assert!(!Seated.can_transition_to(Booked));
        assert!(!Seated.can_transition_to(Cancelled));
        assert!(!Booked.can_transition_to(Finished));
        assert!(!Booked.can_transition_to(Booked));
        for next in [Booked, Seated, Finished, Cancelled] {
            assert!(!Finished.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ReservationStatus::Booked.is_terminal());
        assert!(!ReservationStatus::Seated.is_terminal());
        assert!(ReservationStatus::Finished.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    fn valid_request() -> ReservationRequest {
        serde_json::from_str(
            r#"{
                "first_name": "Ann",
                "last_name": "Lee",
                "mobile_number": "555-000-1111",
                "reservation_date": "2031-04-09",
                "reservation_time": "18:00",
                "people": 2
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_request_deserialization() {
        let request = valid_request();
        assert_eq!(request.first_name, "Ann");
        assert_eq!(request.people, 2);
        assert!(request.status.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_parsed_date_and_time() {
        let request = valid_request();
        assert_eq!(
            request.date(),
            Some(NaiveDate::from_ymd_opt(2031, 4, 9).unwrap())
        );
        assert_eq!(
            request.time(),
            Some(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_request_rejects_zero_people() {
        let mut request = valid_request();
        request.people = 0;
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("people"));
    }

    #[test]
    fn test_request_rejects_empty_names() {
        let mut request = valid_request();
        request.first_name = String::new();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_request_rejects_bad_time() {
        let mut request = valid_request();
        request.reservation_time = "25:00".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("reservation_time"));
    }

    #[test]
    fn test_request_rejects_bad_date() {
        let mut request = valid_request();
        request.reservation_date = "tomorrow".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("reservation_date"));
    }

    #[test]
    fn test_response_time_is_wall_clock_minutes() {
        let reservation = Reservation {
            id: 1,
            reservation_id: Uuid::new_v4(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            mobile_number: "555-000-1111".to_string(),
            reservation_date: NaiveDate::from_ymd_opt(2031, 4, 9).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            people: 2,
            status: ReservationStatus::Booked,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response: ReservationResponse = reservation.into();
        assert_eq!(response.reservation_time, "18:00");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"reservation_date\":\"2031-04-09\""));
        assert!(json.contains("\"status\":\"booked\""));
    }
}
