pub mod aggregate;
pub mod form;

pub use form::{PagoForm, PaymentError};
