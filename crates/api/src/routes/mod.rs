//! HTTP route handlers.

use serde::{Deserialize, Serialize};

pub mod health;
pub mod reservations;
pub mod tables;

/// The `{ "data": ... }` envelope used by every request and response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}
