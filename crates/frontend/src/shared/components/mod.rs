pub mod error_banner;
pub mod filter_panel;
pub mod form_fields;
pub mod loading;
pub mod pagination_controls;
pub mod reason_dialog;
pub mod status_badge;
pub mod table;

pub use error_banner::ErrorBanner;
pub use filter_panel::{FilterDate, FilterInput, FilterPanel, FilterSelect};
pub use form_fields::{id_value, parse_id, FormInput, FormSelect};
pub use loading::{EmptyRow, LoadingBlock, LoadingRow};
pub use pagination_controls::PaginationControls;
pub use reason_dialog::{confirm, ReasonDialog};
pub use status_badge::{ActiveBadge, StatusBadge};
