mod view;
mod view_model;

pub use view::MozoDetails;
pub use view_model::MozoDetailsViewModel;
