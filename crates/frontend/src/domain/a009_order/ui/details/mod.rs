mod invoice_modal;
mod lines;
mod view;
mod view_model;

pub use invoice_modal::InvoiceModal;
pub use lines::OrderLinesEditor;
pub use view::ComandaEditor;
pub use view_model::ComandaEditorViewModel;
