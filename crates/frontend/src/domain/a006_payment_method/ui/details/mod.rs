mod view;
mod view_model;

pub use view::MedioPagoDetails;
pub use view_model::MedioPagoDetailsViewModel;
