//! Карточка сектора: view.rs - разметка, view_model.rs - состояние и команды.

mod view;
mod view_model;

pub use view::SectorDetails;
pub use view_model::SectorDetailsViewModel;
