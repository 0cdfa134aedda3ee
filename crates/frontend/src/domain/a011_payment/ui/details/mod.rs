mod view;
mod view_model;

pub use view::PagoDetails;
pub use view_model::PagoDetailsViewModel;
