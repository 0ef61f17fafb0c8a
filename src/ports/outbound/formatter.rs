use crate::application::read_models::{CatalogPageView, ControlPanelView, ItemDetailView};
use crate::shared::Result;

/// CatalogFormatter port for rendering the catalog views
///
/// This port abstracts the output format (Markdown, JSON) of the three
/// views the application produces.
pub trait CatalogFormatter {
    /// Renders the list page
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_catalog(&self, view: &CatalogPageView) -> Result<String>;

    /// Renders the item detail page
    fn format_detail(&self, view: &ItemDetailView) -> Result<String>;

    /// Renders the feature-toggle panel
    fn format_control_panel(&self, view: &ControlPanelView) -> Result<String>;
}
