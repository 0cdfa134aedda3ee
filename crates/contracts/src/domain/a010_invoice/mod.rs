pub mod aggregate;
pub mod wizard;

pub use wizard::InvoiceWizard;
