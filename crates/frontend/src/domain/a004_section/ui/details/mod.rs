mod view;
mod view_model;

pub use view::SeccionDetails;
pub use view_model::SeccionDetailsViewModel;
