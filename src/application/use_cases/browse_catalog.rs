use crate::application::dto::ListRequest;
use crate::application::read_models::{CatalogPageBuilder, CatalogPageView};
use crate::application::state::{CatalogListState, ToggleStore};
use crate::catalog::domain::ViewState;
use crate::ports::outbound::{CatalogRepository, ProgressReporter};
use crate::shared::Result;

/// BrowseCatalogUseCase - Filter, sort and page through the catalog
///
/// # Type Parameters
/// * `R` - CatalogRepository implementation
/// * `P` - ProgressReporter implementation
pub struct BrowseCatalogUseCase<R, P> {
    repository: R,
    progress_reporter: P,
    store: ToggleStore,
}

impl<R, P> BrowseCatalogUseCase<R, P>
where
    R: CatalogRepository,
    P: ProgressReporter,
{
    pub fn new(repository: R, progress_reporter: P, store: ToggleStore) -> Self {
        Self {
            repository,
            progress_reporter,
            store,
        }
    }

    /// Applies the request to a fresh list state and renders the page
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded or a selection is
    /// not offered by its facet
    pub fn execute(&self, request: ListRequest) -> Result<CatalogPageView> {
        self.progress_reporter.report("📚 Loading catalog...");
        let items = self.repository.list_items()?;
        let options = self.repository.facet_options();

        let mut state = CatalogListState::new(ViewState::new(
            request.page_size,
            request.sort,
            request.view_mode,
        ));

        for (facet, text) in &request.searches {
            if !state.set_search(*facet, text) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: The {} filter has no search box; ignoring search '{}'",
                    facet, text
                ));
            }
        }
        for (facet, value) in &request.selections {
            state.select(&options, *facet, value)?;
        }
        state.set_page(request.page);

        let page = state.query(items.items());
        if page.window.is_past_end() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Page {} is past the last page ({})",
                page.window.page, page.window.page_count
            ));
        }

        let view = CatalogPageBuilder::build(
            &page,
            state.criteria(),
            state.view(),
            &options,
            &self.store.read(),
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Showing {} of {} matching items",
            view.cards.len(),
            view.total
        ));
        Ok(view)
    }
}
