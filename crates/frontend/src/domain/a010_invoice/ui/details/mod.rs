mod view;

pub use view::{invoice_badge_variant, FacturaView};
