//! Состояние списка одного экрана
//!
//! Each screen owns one `ListState`, created on mount and dropped with the
//! screen. It holds the query (search, sort, page) and keeps the page inside
//! the range of the filtered records.

use contracts::shared::list_query::{PageInfo, PageWindow, QueryState, SortDirection};

use super::columns::ColumnDescriptor;
use super::config::ListConfig;
use super::list_utils::{filter_list, next_sort, paginate, sort_list};
use super::records::Row;

/// Rows of the current page plus footer metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: QueryState,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::from_config(&ListConfig::default())
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::default(),
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(config.page_size)
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.query.sort_key.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.query.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.query.current_page
    }

    /// Новый поисковый запрос всегда возвращает на первую страницу
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.query.current_page = 1;
    }

    /// Header click. Columns that are not sortable are ignored.
    ///
    /// Returns whether the sort changed.
    pub fn toggle_sort(&mut self, column: &ColumnDescriptor) -> bool {
        if !column.sortable {
            return false;
        }

        let (key, direction) = next_sort(
            self.query.sort_key.as_deref(),
            self.query.sort_direction,
            &column.key,
        );
        self.query.sort_key = Some(key);
        self.query.sort_direction = direction;
        self.query.current_page = 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.query.current_page = 1;
    }

    /// Moves to `page`, clamped to the pages of `total_records`
    pub fn go_to_page(&mut self, page: usize, total_records: usize) {
        let clamped = PageWindow::new(self.page_size, total_records).clamp_page(page);
        if clamped != page {
            log::debug!(
                "page {} out of range for {} records, using {}",
                page,
                total_records,
                clamped
            );
        }
        self.query.current_page = clamped;
    }

    pub fn first_page(&mut self) {
        self.query.current_page = 1;
    }

    pub fn prev_page(&mut self, total_records: usize) {
        self.go_to_page(self.query.current_page.saturating_sub(1), total_records);
    }

    pub fn next_page(&mut self, total_records: usize) {
        self.go_to_page(self.query.current_page.saturating_add(1), total_records);
    }

    pub fn last_page(&mut self, total_records: usize) {
        let last = PageWindow::new(self.page_size, total_records).total_pages();
        self.query.current_page = last;
    }

    /// Page info for `total_records` matching rows
    pub fn page_info(&self, total_records: usize) -> PageInfo {
        let window = PageWindow::new(self.page_size, total_records);
        PageInfo::new(window, window.clamp_page(self.query.current_page))
    }

    /// Computes the visible page of `records`.
    ///
    /// The stored page is first clamped against the filtered count, so a
    /// search that shrinks the list never shows an empty page.
    pub fn view<'a, R: Row>(
        &mut self,
        records: &'a [R],
        columns: &[ColumnDescriptor],
    ) -> ListView<&'a R> {
        let refs: Vec<&'a R> = records.iter().collect();
        let filtered = filter_list(&refs, &self.query.search_term, columns);
        let matching = filtered.len();
        self.go_to_page(self.query.current_page, matching);

        let sorted = sort_list(&filtered, self.query.sort_key.as_deref(), self.query.sort_direction);
        let page = paginate(&sorted, self.query.current_page, self.page_size);
        log::debug!(
            "list view: {} records, {} matching, page {}/{}",
            records.len(),
            matching,
            self.query.current_page,
            page.total_pages
        );

        ListView {
            rows: page.page_records,
            page_info: self.page_info(matching),
        }
    }
}
