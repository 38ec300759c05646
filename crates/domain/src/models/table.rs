//! Dining table domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A seating resource with fixed capacity, optionally holding one
/// active reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub table_id: Uuid,
    pub table_name: String,
    pub capacity: i32,
    /// Non-null iff the table is occupied.
    pub reservation_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiningTable {
    /// Whether the table currently holds a reservation.
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Request payload for creating a table.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTableRequest {
    #[validate(length(min = 2, message = "table_name must be at least 2 characters long"))]
    pub table_name: String,

    #[validate(range(min = 1, message = "capacity must be a number greater than or equal to 1"))]
    pub capacity: i32,
}

/// Request payload for seating a reservation at a table.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatTableRequest {
    pub reservation_id: Uuid,
}

/// Response payload for table operations.
///
/// `reservation_id` is serialized even when null so clients can tell a
/// free table from a missing field.
#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    pub table_id: Uuid,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DiningTable> for TableResponse {
    fn from(t: DiningTable) -> Self {
        Self {
            table_id: t.table_id,
            table_name: t.table_name,
            capacity: t.capacity,
            reservation_id: t.reservation_id,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}
