//! hummingbird-catalog - Catalog browser prototype for Hummingbird container images
//!
//! This library filters, sorts and pages a small in-memory catalog, derives
//! the item detail page of an image, and threads a set of demo feature
//! toggles through both views. It follows a hexagonal layout.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Catalog Layer** (`catalog`): Domain models and pure services (filter, sort, paginate, section layout)
//! - **Application Layer** (`application`): Use cases, view state, toggle store and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Fixture catalog, formatters, console and file output
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use hummingbird_catalog::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let shell = AppShell::mount(MetadataToggles::default());
//! shell.apply_overrides([(ToggleKey::NewSection, false)]);
//!
//! let use_case = BrowseCatalogUseCase::new(
//!     FixtureCatalogRepository::new(),
//!     StderrProgressReporter::new(),
//!     shell.store().clone(),
//! );
//! let request = ListRequest::new().select(Facet::Category, "Storage");
//! let view = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format_catalog(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::fixtures::FixtureCatalogRepository;
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{DetailRequest, ListRequest, OutputFormat};
    pub use crate::application::read_models::{CatalogPageView, ControlPanelView, ItemDetailView};
    pub use crate::application::state::{use_metadata, ScanTicker, ToggleStore};
    pub use crate::application::use_cases::{
        BrowseCatalogUseCase, ShowControlPanelUseCase, ShowItemDetailUseCase,
    };
    pub use crate::application::AppShell;
    pub use crate::catalog::domain::{
        Facet, FilterCriteria, ImageConfiguration, ImageTag, MetadataToggles, PageSize,
        SoftwareItem, SortKey, ToggleKey, ViewMode, ViewState,
    };
    pub use crate::catalog::services::CatalogEngine;
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
