//! Builds the list page read model from a query result

use super::catalog_page_view::{
    CatalogPageView, ChipView, FacetOptionView, FacetPanelView, ItemCardView,
};
use crate::catalog::domain::{
    Facet, FacetOptions, FilterCriteria, MetadataToggles, SoftwareItem, ViewState,
};
use crate::catalog::services::{CatalogPage, ItemFilter};

pub struct CatalogPageBuilder;

impl CatalogPageBuilder {
    pub fn build(
        page: &CatalogPage<'_>,
        criteria: &FilterCriteria,
        view: &ViewState,
        options: &FacetOptions,
        toggles: &MetadataToggles,
    ) -> CatalogPageView {
        let window = page.window;
        CatalogPageView {
            total: window.total,
            page: window.page,
            page_size: window.page_size,
            page_count: window.page_count,
            first_position: window.first_position(),
            last_position: window.last_position(),
            past_end: window.is_past_end(),
            sort: view.sort(),
            view_mode: view.view_mode(),
            cards: page
                .items
                .iter()
                .map(|item| Self::build_card(item, toggles))
                .collect(),
            chips: criteria.chips().into_iter().map(ChipView::from).collect(),
            filter_panel: toggles
                .filtering
                .then(|| Self::build_filter_panel(criteria, options)),
        }
    }

    fn build_card(item: &SoftwareItem, toggles: &MetadataToggles) -> ItemCardView {
        ItemCardView {
            id: item.id().to_string(),
            name: item.name().to_string(),
            description: item.description().to_string(),
            logo: item.logo().to_string(),
            tags: item.tags().to_vec(),
            provider: toggles
                .distributor_name
                .then(|| item.provider().to_string()),
            published: toggles
                .published_time
                .then(|| item.published().to_string()),
            favorite: toggles.favoriting,
        }
    }

    fn build_filter_panel(criteria: &FilterCriteria, options: &FacetOptions) -> Vec<FacetPanelView> {
        let filter = ItemFilter::new(criteria);
        Facet::ALL
            .into_iter()
            .map(|facet| FacetPanelView {
                facet,
                label: facet.label().to_string(),
                search: facet
                    .is_searchable()
                    .then(|| criteria.search(facet).to_string()),
                options: filter
                    .offered_options(options, facet)
                    .into_iter()
                    .map(|value| FacetOptionView {
                        value: value.to_string(),
                        selected: criteria.is_selected(facet, value),
                    })
                    .collect(),
            })
            .collect()
    }
}
