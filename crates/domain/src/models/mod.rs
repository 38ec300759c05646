//! Domain models.

pub mod reservation;
pub mod table;

pub use reservation::{Reservation, ReservationStatus};
pub use table::DiningTable;
