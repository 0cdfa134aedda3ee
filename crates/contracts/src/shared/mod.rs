pub mod api;
pub mod datetime;
pub mod list_state;
pub mod money;
pub mod validation;
