//! Client-side state: the toggle store, its propagation channel and the
//! list page's filter/view state.

mod catalog_list_state;
mod metadata_context;
mod scan_ticker;
mod toggle_store;

pub use catalog_list_state::CatalogListState;
pub use metadata_context::{try_use_metadata, use_metadata, MetadataProvider};
pub use scan_ticker::{scanned_label, ScanTicker, DEFAULT_SCAN_INTERVAL};
pub use toggle_store::{SubscriptionId, ToggleStore};
