pub mod aggregate;
pub mod status;

pub use status::{ReservaEstado, ReservationError};
