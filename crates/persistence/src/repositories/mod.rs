//! Repository implementations.

pub mod reservation;
pub mod table;

pub use reservation::ReservationRepository;
pub use table::TableRepository;
