//! Общие типы и трейты для всех агрегатов

pub mod aggregate_id;
pub mod aggregate_root;
pub mod deactivatable;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use deactivatable::Deactivatable;
