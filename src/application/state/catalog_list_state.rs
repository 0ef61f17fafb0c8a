use crate::catalog::domain::{
    Facet, FacetOptions, FilterChip, FilterCriteria, PageSize, SoftwareItem, SortKey, ViewMode,
    ViewState,
};
use crate::catalog::services::{CatalogEngine, CatalogPage};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Filter and view state of the catalog list page.
///
/// Owns the invariant that any change to the selections or the page size
/// sends the list back to page 1.
#[derive(Debug, Clone, Default)]
pub struct CatalogListState {
    criteria: FilterCriteria,
    view: ViewState,
}

impl CatalogListState {
    pub fn new(view: ViewState) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            view,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Selects `value` in `facet`, rejecting values the facet does not offer
    pub fn select(&mut self, options: &FacetOptions, facet: Facet, value: &str) -> Result<()> {
        if !options.offers(facet, value) {
            return Err(CatalogError::UnknownFacetOption {
                facet: facet.label().to_string(),
                value: value.to_string(),
                available: options.options(facet).join(", "),
            }
            .into());
        }
        if self.criteria.select(facet, value) {
            self.view.reset_page();
        }
        Ok(())
    }

    pub fn deselect(&mut self, facet: Facet, value: &str) {
        if self.criteria.deselect(facet, value) {
            self.view.reset_page();
        }
    }

    /// Narrows the option list of a searchable facet; the items and the
    /// page are untouched.
    pub fn set_search(&mut self, facet: Facet, text: &str) -> bool {
        self.criteria.set_search(facet, text)
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) {
        if self.criteria.remove_chip(chip) {
            self.view.reset_page();
        }
    }

    /// Empties every selection and returns to page 1. Sort, view mode and
    /// page size are kept.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.view.reset_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.set_page_size(page_size);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.set_sort(sort);
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view.set_view_mode(view_mode);
    }

    pub fn query<'a>(&self, items: &'a [SoftwareItem]) -> CatalogPage<'a> {
        CatalogEngine::query(items, &self.criteria, &self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ItemId;

    fn options() -> FacetOptions {
        FacetOptions::new()
            .with(Facet::Provider, ["Red Hat", "6WIND"])
            .with(Facet::Platform, ["x86_64"])
    }

    fn items() -> Vec<SoftwareItem> {
        (1..=45)
            .map(|i| {
                SoftwareItem::new(ItemId::new(i.to_string()).unwrap(), format!("item {}", i))
                    .with_provider(if i % 2 == 0 { "Red Hat" } else { "6WIND" })
            })
            .collect()
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let mut state = CatalogListState::default();
        let error = state
            .select(&options(), Facet::Provider, "Nobody")
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownFacetOption { .. })
        ));
        assert!(!state.criteria().has_active_filters());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = CatalogListState::default();
        state.set_page(3);
        state.select(&options(), Facet::Provider, "Red Hat").unwrap();
        assert_eq!(state.view().page(), 1);

        state.set_page(2);
        state.deselect(Facet::Provider, "Red Hat");
        assert_eq!(state.view().page(), 1);
    }

    #[test]
    fn test_search_keeps_page() {
        let mut state = CatalogListState::default();
        state.set_page(2);
        state.set_search(Facet::Provider, "red");
        assert_eq!(state.view().page(), 2);
    }

    #[test]
    fn test_clear_filters_keeps_view_settings() {
        let mut state = CatalogListState::default();
        state.set_sort(SortKey::Name);
        state.set_view_mode(ViewMode::Grid);
        state.set_page_size(PageSize::Fifty);
        state.select(&options(), Facet::Provider, "6WIND").unwrap();
        state.set_page(2);

        state.clear_filters();

        assert!(state.criteria().chips().is_empty());
        assert_eq!(state.view().page(), 1);
        assert_eq!(state.view().sort(), SortKey::Name);
        assert_eq!(state.view().view_mode(), ViewMode::Grid);
        assert_eq!(state.view().page_size(), PageSize::Fifty);
    }

    #[test]
    fn test_clear_filters_shows_the_full_first_page() {
        let items = items();
        let mut state = CatalogListState::default();
        state.select(&options(), Facet::Provider, "Red Hat").unwrap();
        assert_eq!(state.query(&items).window.total, 22);

        state.clear_filters();
        let page = state.query(&items);
        assert_eq!(page.window.total, 45);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].name(), "item 1");
    }

    #[test]
    fn test_remove_chip() {
        let mut state = CatalogListState::default();
        state.select(&options(), Facet::Platform, "x86_64").unwrap();
        let chip = state.criteria().chips().remove(0);
        state.remove_chip(&chip);
        assert!(!state.criteria().has_active_filters());
    }

    #[test]
    fn test_offered_platform_filter_yields_no_results() {
        let items = items();
        let mut state = CatalogListState::default();
        state.select(&options(), Facet::Platform, "x86_64").unwrap();
        assert!(state.query(&items).items.is_empty());
    }
}
