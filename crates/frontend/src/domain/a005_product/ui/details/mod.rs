mod view;
mod view_model;

pub use view::ProductoDetails;
pub use view_model::ProductoDetailsViewModel;
