pub mod aggregate;
pub mod draft;
pub mod status;

pub use draft::{OrderDraft, OrderLine};
pub use status::{OrderError, OrderStatus};
