use crate::application::read_models::{ControlPanelView, PanelPage};
use crate::application::state::use_metadata;

/// ShowControlPanelUseCase - Renders the feature-toggle side panel
///
/// The panel is nested inside the application shell and reads the toggle
/// store through the mounted provider.
///
/// # Panics
/// Panics when executed without a mounted `MetadataProvider`.
#[derive(Debug, Default)]
pub struct ShowControlPanelUseCase;

impl ShowControlPanelUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, page: PanelPage) -> ControlPanelView {
        let toggles = use_metadata().read();
        ControlPanelView::build(&toggles, page)
    }
}
