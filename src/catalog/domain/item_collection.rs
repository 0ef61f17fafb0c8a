use super::software_item::SoftwareItem;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::collections::HashSet;

/// The active set of catalog items, in fixture order, with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection {
    items: Vec<SoftwareItem>,
}

impl ItemCollection {
    /// Builds a collection, rejecting duplicate ids
    pub fn new(items: Vec<SoftwareItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().as_str()) {
                return Err(CatalogError::DuplicateItemId {
                    id: item.id().to_string(),
                }
                .into());
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[SoftwareItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by id, by name (case-insensitive) or by slug
    pub fn find(&self, query: &str) -> Option<&SoftwareItem> {
        let query = query.trim();
        self.items
            .iter()
            .find(|item| item.id().as_str() == query)
            .or_else(|| {
                self.items
                    .iter()
                    .find(|item| item.name().eq_ignore_ascii_case(query) || item.slug() == query)
            })
    }

    /// Like `find`, but a miss is an `ItemNotFound` error naming the
    /// available items
    pub fn get(&self, query: &str) -> Result<&SoftwareItem> {
        self.find(query).ok_or_else(|| {
            let available: Vec<String> = self
                .items
                .iter()
                .map(|item| format!("{} ({})", item.slug(), item.id()))
                .collect();
            CatalogError::ItemNotFound {
                query: query.to_string(),
                suggestion: if available.is_empty() {
                    "The catalog is empty".to_string()
                } else {
                    format!("Available items: {}", available.join(", "))
                },
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ItemId;

    fn item(id: &str, name: &str) -> SoftwareItem {
        SoftwareItem::new(ItemId::new(id).unwrap(), name)
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = ItemCollection::new(vec![item("1", "a"), item("1", "b")]);
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CatalogError>(),
            Some(CatalogError::DuplicateItemId { id }) if id == "1"
        ));
    }

    #[test]
    fn test_keeps_fixture_order() {
        let collection = ItemCollection::new(vec![item("2", "b"), item("1", "a")]).unwrap();
        let ids: Vec<&str> = collection.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
    }

    #[test]
    fn test_find_by_id_name_or_slug() {
        let collection =
            ItemCollection::new(vec![item("6", "Prometheus Monitoring")]).unwrap();
        assert!(collection.find("6").is_some());
        assert!(collection.find("prometheus monitoring").is_some());
        assert!(collection.find("prometheus-monitoring").is_some());
        assert!(collection.find("grafana").is_none());
    }

    #[test]
    fn test_get_reports_item_not_found() {
        let collection = ItemCollection::new(vec![item("6", "Prometheus Monitoring")]).unwrap();
        let error = collection.get("grafana").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Catalog item not found: grafana"));
        assert!(message.contains("prometheus-monitoring (6)"));
    }

    #[test]
    fn test_empty_collection() {
        let collection = ItemCollection::default();
        assert!(collection.is_empty());
        assert!(collection.get("anything").unwrap_err().to_string().contains("empty"));
    }
}
