//! Read models for CQRS-lite pattern
//!
//! View-optimized structs built from catalog state for the formatters.
//! All of them serialize directly to the JSON output.

mod catalog_page_builder;
pub mod catalog_page_view;
pub mod control_panel_view;
mod item_detail_builder;
pub mod item_detail_view;

pub use catalog_page_builder::CatalogPageBuilder;
pub use catalog_page_view::{
    CatalogPageView, ChipView, FacetOptionView, FacetPanelView, ItemCardView,
};
pub use control_panel_view::{ControlPanelView, PanelPage, ToggleEntryView, ToggleGroupView};
pub use item_detail_builder::{DetailContext, ItemDetailBuilder};
pub use item_detail_view::{
    ConfigurationView, CvePanelView, HeaderFact, ItemDetailView, JumpLinkView, SectionView,
};
