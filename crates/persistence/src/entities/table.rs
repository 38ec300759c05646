//! Dining table entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::DiningTable;

/// Database row mapping for the tables table.
#[derive(Debug, Clone, FromRow)]
pub struct TableEntity {
    pub id: i64,
    pub table_id: Uuid,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TableEntity> for DiningTable {
    fn from(entity: TableEntity) -> Self {
        Self {
            id: entity.id,
            table_id: entity.table_id,
            table_name: entity.table_name,
            capacity: entity.capacity,
            reservation_id: entity.reservation_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_to_domain() {
        let entity = TableEntity {
            id: 3,
            table_id: Uuid::new_v4(),
            table_name: "Bar #2".to_string(),
            capacity: 4,
            reservation_id: Some(Uuid::new_v4()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let table: DiningTable = entity.clone().into();
        assert_eq!(table.table_id, entity.table_id);
        assert_eq!(table.table_name, entity.table_name);
        assert_eq!(table.capacity, entity.capacity);
        assert_eq!(table.reservation_id, entity.reservation_id);
        assert!(table.is_occupied());
    }
}
