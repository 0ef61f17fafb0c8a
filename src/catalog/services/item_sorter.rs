use crate::catalog::domain::{SoftwareItem, SortKey};
use std::cmp::Ordering;

/// ItemSorter - Orders the filtered items for display
///
/// All orderings are stable, so items that compare equal keep their
/// fixture order.
pub struct ItemSorter;

impl ItemSorter {
    /// Sorts `items` in place according to `key`
    ///
    /// * `Relevance` keeps the incoming (fixture) order
    /// * `Name` is ascending and case-insensitive
    /// * `Date` puts the most recently published first; items whose label
    ///   cannot be parsed go last
    pub fn sort(items: &mut [&SoftwareItem], key: SortKey) {
        match key {
            SortKey::Relevance => {}
            SortKey::Name => items.sort_by_cached_key(|item| item.name().to_lowercase()),
            SortKey::Date => items.sort_by(|a, b| {
                match (a.published_recency(), b.published_recency()) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ItemId;

    fn item(id: &str, name: &str, published: &str) -> SoftwareItem {
        SoftwareItem::new(ItemId::new(id).unwrap(), name).with_published(published)
    }

    fn names(items: &[&SoftwareItem]) -> Vec<String> {
        items.iter().map(|item| item.name().to_string()).collect()
    }

    #[test]
    fn test_relevance_keeps_fixture_order() {
        let (b, a, c) = (item("1", "b", ""), item("2", "a", ""), item("3", "c", ""));
        let mut items = vec![&b, &a, &c];
        ItemSorter::sort(&mut items, SortKey::Relevance);
        assert_eq!(names(&items), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_name_sort_ascending() {
        let (b, a, c) = (item("1", "b", ""), item("2", "a", ""), item("3", "c", ""));
        let mut items = vec![&b, &a, &c];
        ItemSorter::sort(&mut items, SortKey::Name);
        assert_eq!(names(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let (upper, lower) = (item("1", "Zeta", ""), item("2", "alpha", ""));
        let mut items = vec![&upper, &lower];
        ItemSorter::sort(&mut items, SortKey::Name);
        assert_eq!(names(&items), vec!["alpha", "Zeta"]);
    }

    #[test]
    fn test_date_sort_newest_first() {
        let old = item("1", "old", "3 hours ago");
        let fresh = item("2", "fresh", "5 minutes ago");
        let mid = item("3", "mid", "45 minutes ago");
        let mut items = vec![&old, &fresh, &mid];
        ItemSorter::sort(&mut items, SortKey::Date);
        assert_eq!(names(&items), vec!["fresh", "mid", "old"]);
    }

    #[test]
    fn test_date_sort_unparseable_last_and_stable() {
        let unknown_a = item("1", "unknown-a", "sometime");
        let dated = item("2", "dated", "2 days ago");
        let unknown_b = item("3", "unknown-b", "");
        let same_age = item("4", "same-age", "2 days ago");
        let mut items = vec![&unknown_a, &dated, &unknown_b, &same_age];
        ItemSorter::sort(&mut items, SortKey::Date);
        assert_eq!(
            names(&items),
            vec!["dated", "same-age", "unknown-a", "unknown-b"]
        );
    }
}
