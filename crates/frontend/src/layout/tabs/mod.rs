//! Вкладки: полоса, обёртка страницы, ключ → экран, заголовки.

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::TabStrip;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
