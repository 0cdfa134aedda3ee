mod view;
mod view_model;

pub use view::ClienteDetails;
pub use view_model::ClienteDetailsViewModel;
