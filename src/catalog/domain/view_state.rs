use serde::Serialize;
use std::fmt;

/// Results per page offered by the pagination control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "usize")]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Twenty, PageSize::Fifty, PageSize::Hundred];

    pub fn value(self) -> usize {
        match self {
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.value()
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(PageSize::from_value)
            .ok_or_else(|| {
                format!(
                    "Invalid page size: {}. Please specify 20, 50 or 100",
                    s
                )
            })
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Ordering of the result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Fixture order; there is no scoring model
    #[default]
    Relevance,
    Name,
    /// Newest publication first
    Date,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify 'relevance', 'name' or 'date'",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Relevance => write!(f, "relevance"),
            SortKey::Name => write!(f, "name"),
            SortKey::Date => write!(f, "date"),
        }
    }
}

/// Card layout of the result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(format!(
                "Invalid view mode: {}. Please specify 'list' or 'grid'",
                s
            )),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => write!(f, "list"),
            ViewMode::Grid => write!(f, "grid"),
        }
    }
}

/// Pagination, sort and display mode of a list view.
///
/// Pages are 1-based. Changing the page size sends the view back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    page: usize,
    page_size: PageSize,
    sort: SortKey,
    view_mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            sort: SortKey::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl ViewState {
    pub fn new(page_size: PageSize, sort: SortKey, view_mode: ViewMode) -> Self {
        Self {
            page: 1,
            page_size,
            sort,
            view_mode,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Moves to `page`; page 0 is read as the first page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_page_size_from_str() {
        assert_eq!(PageSize::from_str("20").unwrap(), PageSize::Twenty);
        assert_eq!(PageSize::from_str("50").unwrap(), PageSize::Fifty);
        assert_eq!(PageSize::from_str(" 100 ").unwrap(), PageSize::Hundred);
    }

    #[test]
    fn test_page_size_from_str_invalid() {
        let error = PageSize::from_str("25").unwrap_err();
        assert!(error.contains("Invalid page size"));
        assert!(PageSize::from_str("twenty").is_err());
    }

    #[test]
    fn test_sort_key_from_str_case_insensitive() {
        assert_eq!(SortKey::from_str("NAME").unwrap(), SortKey::Name);
        assert_eq!(SortKey::from_str("Date").unwrap(), SortKey::Date);
        assert!(SortKey::from_str("popularity").is_err());
    }

    #[test]
    fn test_view_mode_round_trips_through_display() {
        for mode in [ViewMode::List, ViewMode::Grid] {
            assert_eq!(ViewMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_default_view_state() {
        let view = ViewState::default();
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_size(), PageSize::Twenty);
        assert_eq!(view.sort(), SortKey::Relevance);
        assert_eq!(view.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut view = ViewState::default();
        view.set_page(4);
        view.set_page_size(PageSize::Fifty);
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_size(), PageSize::Fifty);
    }

    #[test]
    fn test_sort_and_mode_changes_keep_page() {
        let mut view = ViewState::default();
        view.set_page(3);
        view.set_sort(SortKey::Name);
        view.set_view_mode(ViewMode::Grid);
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let mut view = ViewState::default();
        view.set_page(0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_page_size_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PageSize::Fifty).unwrap(), "50");
    }
}
