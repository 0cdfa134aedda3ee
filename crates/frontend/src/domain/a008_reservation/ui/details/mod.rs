mod order_from_reservation;
mod view;
mod view_model;

pub use order_from_reservation::OrderFromReservation;
pub use view::ReservaDetails;
pub use view_model::ReservaDetailsViewModel;
