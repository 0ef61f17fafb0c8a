use hummingbird_catalog::catalog::domain::{
    FacetOptions, ImageProfile, ImageTag, ItemCollection, ItemId, TagOption,
};
use hummingbird_catalog::prelude::*;

/// Mock CatalogRepository for testing
///
/// Serves the given items and options; every item gets the same profile
/// shape, named after the item's slug.
pub struct MockCatalogRepository {
    pub items: Vec<SoftwareItem>,
    pub options: FacetOptions,
    pub should_fail: bool,
}

impl MockCatalogRepository {
    pub fn new(items: Vec<SoftwareItem>, options: FacetOptions) -> Self {
        Self {
            items,
            options,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            items: Vec::new(),
            options: FacetOptions::new(),
            should_fail: true,
        }
    }

    /// Builds an item with a provider, a category tag and a published label
    pub fn item(id: &str, name: &str, provider: &str, category: &str, published: &str) -> SoftwareItem {
        SoftwareItem::new(ItemId::new(id).unwrap(), name)
            .with_description(format!("{} description", name))
            .with_logo("🔵")
            .with_tags(["Containerized application", category])
            .with_provider(provider)
            .with_published(published)
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn list_items(&self) -> Result<ItemCollection> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        ItemCollection::new(self.items.clone())
    }

    fn facet_options(&self) -> FacetOptions {
        self.options.clone()
    }

    fn image_profile(&self, item: &SoftwareItem) -> Result<ImageProfile> {
        Ok(ImageProfile::new(item.slug(), "2.0.0")
            .with_tags(vec![
                TagOption::new(ImageTag::Latest),
                TagOption::new(ImageTag::LatestBuilder),
                TagOption::new(ImageTag::Version("2.0.0".to_string())),
            ])
            .with_updated("just now")
            .with_scanned("just now"))
    }
}
