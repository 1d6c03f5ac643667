//! Табы
//!
//! - `page` - обёртка контента таба
//! - `registry` - маппинг tab.key → View
//! - `tab_labels` - заголовки табов
//! - `tab_bar` - полоса заголовков открытых табов

pub mod page;
pub mod registry;
pub mod tab_bar;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_bar::TabBar;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
