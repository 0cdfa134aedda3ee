pub mod payments;
pub mod ui;
