use crate::catalog::domain::{FacetOptions, ImageProfile, ItemCollection, SoftwareItem};
use crate::shared::Result;

/// CatalogRepository port for the catalog's data source
///
/// This port abstracts where listings, filter options and image profiles
/// come from. The prototype ships an in-memory fixture adapter.
pub trait CatalogRepository {
    /// Loads every listing, in display (relevance) order
    ///
    /// # Errors
    /// Returns an error if the listings cannot be assembled into a valid
    /// collection (e.g. duplicate ids)
    fn list_items(&self) -> Result<ItemCollection>;

    /// Option lists of the sidebar facets
    fn facet_options(&self) -> FacetOptions;

    /// Detail-page facts for the image behind `item`
    ///
    /// # Errors
    /// Returns an error if no profile exists for the item
    fn image_profile(&self, item: &SoftwareItem) -> Result<ImageProfile>;
}
