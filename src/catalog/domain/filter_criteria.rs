use super::facet::Facet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One active selection, shown as a removable chip above the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub facet: Facet,
    pub value: String,
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.facet.label(), self.value)
    }
}

/// The user's current filter selection.
///
/// Selections are kept per facet in selection order. Free-text searches are
/// stored alongside but only narrow the option lists, never the items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    selections: BTreeMap<Facet, Vec<String>>,
    searches: BTreeMap<Facet, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the facet's selection. Returns false if it was
    /// already selected.
    pub fn select(&mut self, facet: Facet, value: &str) -> bool {
        let selected = self.selections.entry(facet).or_default();
        if selected.iter().any(|v| v == value) {
            return false;
        }
        selected.push(value.to_string());
        true
    }

    /// Removes `value` from the facet's selection. Returns false if it was
    /// not selected.
    pub fn deselect(&mut self, facet: Facet, value: &str) -> bool {
        let Some(selected) = self.selections.get_mut(&facet) else {
            return false;
        };
        let before = selected.len();
        selected.retain(|v| v != value);
        let changed = selected.len() != before;
        if selected.is_empty() {
            self.selections.remove(&facet);
        }
        changed
    }

    /// Checkbox semantics: checked selects, unchecked deselects
    pub fn set_selected(&mut self, facet: Facet, value: &str, checked: bool) -> bool {
        if checked {
            self.select(facet, value)
        } else {
            self.deselect(facet, value)
        }
    }

    pub fn selected(&self, facet: Facet) -> &[String] {
        self.selections.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).iter().any(|v| v == value)
    }

    /// Facets with at least one selected value, in facet order
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &[String])> {
        self.selections
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(facet, values)| (*facet, values.as_slice()))
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_facets().next().is_some()
    }

    /// Stores the search text of a searchable facet. Non-searchable facets
    /// have no search box, so the call is ignored and returns false.
    pub fn set_search(&mut self, facet: Facet, text: &str) -> bool {
        if !facet.is_searchable() {
            return false;
        }
        if text.is_empty() {
            self.searches.remove(&facet);
        } else {
            self.searches.insert(facet, text.to_string());
        }
        true
    }

    pub fn search(&self, facet: Facet) -> &str {
        self.searches.get(&facet).map(String::as_str).unwrap_or("")
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        self.active_facets()
            .flat_map(|(facet, values)| {
                values.iter().map(move |value| FilterChip {
                    facet,
                    value: value.clone(),
                })
            })
            .collect()
    }

    pub fn remove_chip(&mut self, chip: &FilterChip) -> bool {
        self.deselect(chip.facet, &chip.value)
    }

    /// Empties every selection (and with them the chip list). Search boxes
    /// keep their text.
    pub fn clear(&mut self) {
        self.selections.clear();
    }
}
