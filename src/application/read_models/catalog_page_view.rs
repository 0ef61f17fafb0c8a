//! Read model of the catalog list page

use crate::catalog::domain::{Facet, FilterChip, SortKey, ViewMode};
use serde::Serialize;

/// The rendered state of the list page for the current query
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageView {
    /// Items matching the filters, across all pages
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    /// 1-based position of the first card, 0 when the page is empty
    pub first_position: usize,
    pub last_position: usize,
    /// The requested page lies beyond the last page of a non-empty result
    pub past_end: bool,
    pub sort: SortKey,
    pub view_mode: ViewMode,
    pub cards: Vec<ItemCardView>,
    pub chips: Vec<ChipView>,
    /// Present only while the filtering toggle is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_panel: Option<Vec<FacetPanelView>>,
}

impl CatalogPageView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One result card; optional facts are `None` while their toggle is off
#[derive(Debug, Clone, Serialize)]
pub struct ItemCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Whether the favourite marker is shown
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipView {
    pub facet: Facet,
    pub value: String,
    pub label: String,
}

impl From<FilterChip> for ChipView {
    fn from(chip: FilterChip) -> Self {
        Self {
            label: chip.to_string(),
            facet: chip.facet,
            value: chip.value,
        }
    }
}

/// One facet group of the filter sidebar
#[derive(Debug, Clone, Serialize)]
pub struct FacetPanelView {
    pub facet: Facet,
    pub label: String,
    /// Search text, for the searchable facets only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub options: Vec<FacetOptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetOptionView {
    pub value: String,
    pub selected: bool,
}
