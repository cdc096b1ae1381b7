use serde::{Deserialize, Serialize};

/// Sort direction of a list column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Query state of one list screen: search, sort and current page (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default = "first_page")]
    pub current_page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
        }
    }
}

/// Size of a page and the number of records being paged over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page_size: usize,
    pub total_records: usize,
}

impl PageWindow {
    /// A zero page size is treated as 1
    pub fn new(page_size: usize, total_records: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total_records,
        }
    }

    /// `max(1, ceil(total_records / page_size))`
    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Brings a requested page into `[1, total_pages]`
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages())
    }
}

/// Pagination metadata handed to the table footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new(window: PageWindow, current_page: usize) -> Self {
        let total_pages = window.total_pages();
        Self {
            current_page,
            total_pages,
            total_items: window.total_records,
            page_size: window.page_size,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(PageWindow::new(10, 0).total_pages(), 1);
        assert_eq!(PageWindow::new(10, 10).total_pages(), 1);
        assert_eq!(PageWindow::new(10, 11).total_pages(), 2);
        assert_eq!(PageWindow::new(10, 25).total_pages(), 3);
        assert_eq!(PageWindow::new(0, 3).total_pages(), 3);
    }

    #[test]
    fn test_clamp_page() {
        let window = PageWindow::new(10, 25);
        assert_eq!(window.clamp_page(0), 1);
        assert_eq!(window.clamp_page(2), 2);
        assert_eq!(window.clamp_page(9), 3);
        assert_eq!(PageWindow::new(10, 0).clamp_page(4), 1);
    }

    #[test]
    fn test_page_info_full_last_page() {
        // 20 records, 10 per page: page 2 is full but there is no page 3
        let info = PageInfo::new(PageWindow::new(10, 20), 2);
        assert_eq!(info.total_pages, 2);
        assert!(!info.has_next_page);
        assert!(info.has_previous_page);
    }

    #[test]
    fn test_query_state_defaults_from_json() {
        let state: QueryState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, QueryState::default());

        let state: QueryState =
            serde_json::from_str(r#"{"sort_key":"qty","sort_direction":"desc"}"#).unwrap();
        assert_eq!(state.sort_key.as_deref(), Some("qty"));
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
