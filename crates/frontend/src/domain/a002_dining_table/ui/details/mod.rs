mod view;
mod view_model;

pub use view::MesaDetails;
pub use view_model::MesaDetailsViewModel;
