use crate::application::read_models::{CatalogPageView, ControlPanelView, ItemDetailView};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter for rendering the read models as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format_catalog(&self, view: &CatalogPageView) -> Result<String> {
        Self::to_json(view)
    }

    fn format_detail(&self, view: &ItemDetailView) -> Result<String> {
        Self::to_json(view)
    }

    fn format_control_panel(&self, view: &ControlPanelView) -> Result<String> {
        Self::to_json(view)
    }
}
