use crate::catalog::domain::{Facet, PageSize, SortKey, ViewMode};

/// ListRequest - Input of the browse-catalog use case
///
/// Selections are applied in order; each must be offered by its facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub selections: Vec<(Facet, String)>,
    pub searches: Vec<(Facet, String)>,
    pub page: usize,
    pub page_size: PageSize,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

impl ListRequest {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn select(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selections.push((facet, value.into()));
        self
    }

    pub fn search(mut self, facet: Facet, text: impl Into<String>) -> Self {
        self.searches.push((facet, text.into()));
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}
