use super::item_filter::ItemFilter;
use super::item_sorter::ItemSorter;
use super::paginator::{PageWindow, Paginator};
use crate::catalog::domain::{FilterCriteria, SoftwareItem, ViewState};

/// The visible page of a catalog query
#[derive(Debug, Clone)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a SoftwareItem>,
    pub window: PageWindow,
}

/// CatalogEngine - Filter, sort, then paginate
///
/// Pure over its inputs and never fails: an empty filter result or an
/// out-of-range page both produce an empty page.
pub struct CatalogEngine;

impl CatalogEngine {
    pub fn query<'a>(
        items: &'a [SoftwareItem],
        criteria: &FilterCriteria,
        view: &ViewState,
    ) -> CatalogPage<'a> {
        let mut matching = ItemFilter::new(criteria).filter(items);
        ItemSorter::sort(&mut matching, view.sort());
        let (visible, window) =
            Paginator::paginate(&matching, view.page(), view.page_size().value());

        CatalogPage {
            items: visible.to_vec(),
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{Facet, ItemId, SortKey};

    fn items() -> Vec<SoftwareItem> {
        ["b", "a", "c"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                SoftwareItem::new(ItemId::new((i + 1).to_string()).unwrap(), *name)
                    .with_provider(if i == 1 { "ACME" } else { "Other" })
            })
            .collect()
    }

    #[test]
    fn test_default_query_returns_everything_in_fixture_order() {
        let items = items();
        let page = CatalogEngine::query(&items, &FilterCriteria::new(), &ViewState::default());
        let names: Vec<&str> = page.items.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(page.window.total, 3);
        assert_eq!(page.window.page_count, 1);
    }

    #[test]
    fn test_filter_then_sort() {
        let items = items();
        let mut criteria = FilterCriteria::new();
        criteria.select(Facet::Provider, "Other");
        let mut view = ViewState::default();
        view.set_sort(SortKey::Name);
        let page = CatalogEngine::query(&items, &criteria, &view);
        let names: Vec<&str> = page.items.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = items();
        let mut view = ViewState::default();
        view.set_page(5);
        let page = CatalogEngine::query(&items, &FilterCriteria::new(), &view);
        assert!(page.items.is_empty());
        assert_eq!(page.window.total, 3);
    }
}
