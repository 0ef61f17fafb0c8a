//! Use cases orchestrating the catalog layer through the outbound ports

mod browse_catalog;
mod show_control_panel;
mod show_item_detail;

pub use browse_catalog::BrowseCatalogUseCase;
pub use show_control_panel::ShowControlPanelUseCase;
pub use show_item_detail::ShowItemDetailUseCase;
