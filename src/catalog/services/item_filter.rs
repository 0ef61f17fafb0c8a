use crate::catalog::domain::{Facet, FacetOptions, FacetValues, FilterCriteria};

/// ItemFilter - Applies the sidebar selections to a list of items
///
/// An item passes when, for every facet with at least one selection, one of
/// the item's values for that facet is selected: AND across facets, OR
/// within a facet. With no selections every item passes.
#[derive(Debug)]
pub struct ItemFilter<'a> {
    criteria: &'a FilterCriteria,
}

impl<'a> ItemFilter<'a> {
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn matches<T: FacetValues>(&self, item: &T) -> bool {
        self.criteria.active_facets().all(|(facet, selected)| {
            item.facet_values(facet)
                .iter()
                .any(|value| selected.iter().any(|s| s.as_str() == *value))
        })
    }

    /// Keeps the passing items, preserving their order
    pub fn filter<'i, T: FacetValues>(&self, items: &'i [T]) -> Vec<&'i T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Options of each facet as narrowed by its search text.
    ///
    /// Searches only shape the option list; they never remove items.
    pub fn offered_options<'o>(&self, options: &'o FacetOptions, facet: Facet) -> Vec<&'o str> {
        options.search(facet, self.criteria.search(facet))
    }
}
