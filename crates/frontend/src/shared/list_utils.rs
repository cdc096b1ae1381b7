//! Универсальные утилиты для работы со списками (поиск, сортировка, пагинация)
//!
//! Every list screen runs the same pipeline over the records it fetched:
//! filter → sort → paginate. The functions here are pure and never reorder
//! or mutate their input.

use std::cmp::Ordering;

use contracts::shared::list_query::{PageWindow, QueryState, SortDirection};
use serde_json::Value;

use super::columns::ColumnDescriptor;
use super::records::{read_field, Row};

/// One page of a list, with the page count of the whole sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub page_records: Vec<T>,
    pub total_pages: usize,
}

/// Фильтрует список по поисковому запросу
///
/// A row is kept when any column's raw value contains `search_term`,
/// case-insensitively. An empty term keeps everything.
pub fn filter_list<T: Row + Clone>(
    items: &[T],
    search_term: &str,
    columns: &[ColumnDescriptor],
) -> Vec<T> {
    if search_term.is_empty() {
        return items.to_vec();
    }

    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            columns
                .iter()
                .any(|column| column.search_text(*item).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Сортирует список по указанному полю
///
/// Stable: rows with equal keys keep their relative order in both directions.
pub fn sort_list<T: Row + Clone>(
    items: &[T],
    sort_key: Option<&str>,
    direction: SortDirection,
) -> Vec<T> {
    let mut sorted = items.to_vec();
    let Some(key) = sort_key else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let cmp = compare_values(read_field(a, key), read_field(b, key));
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    sorted
}

/// Cuts page `current_page` (1-based) out of `items`.
///
/// Does not clamp: a page outside `1..=total_pages` is empty.
pub fn paginate<T: Clone>(items: &[T], current_page: usize, page_size: usize) -> Page<T> {
    let window = PageWindow::new(page_size, items.len());
    let total_pages = window.total_pages();

    let page_records = match current_page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(window.page_size).min(items.len());
            let end = start.saturating_add(window.page_size).min(items.len());
            items[start..end].to_vec()
        }
        None => Vec::new(),
    };

    Page {
        page_records,
        total_pages,
    }
}

/// Sort state after a click on the header of `clicked_key`
///
/// Same column flips the direction, another column starts ascending.
pub fn next_sort(
    current_key: Option<&str>,
    current_direction: SortDirection,
    clicked_key: &str,
) -> (String, SortDirection) {
    if current_key == Some(clicked_key) {
        (clicked_key.to_string(), current_direction.toggled())
    } else {
        (clicked_key.to_string(), SortDirection::Asc)
    }
}

/// Runs filter → sort → paginate for `query`
pub fn apply_query<T: Row + Clone>(
    items: &[T],
    columns: &[ColumnDescriptor],
    query: &QueryState,
    page_size: usize,
) -> Page<T> {
    let filtered = filter_list(items, &query.search_term, columns);
    let sorted = sort_list(&filtered, query.sort_key.as_deref(), query.sort_direction);
    paginate(&sorted, query.current_page, page_size)
}

// ============================================================================
// Value ordering
// ============================================================================

/// Rank of a value kind; values of different kinds order by rank
fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 4,
    }
}

/// Total order over optional JSON values.
///
/// Numbers compare numerically, strings lexicographically, booleans false
/// before true. Missing, null, arrays and objects are equal within their kind.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            }
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

// ============================================================================
// Header and cell helpers
// ============================================================================

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(
    current_key: Option<&str>,
    column_key: &str,
    direction: SortDirection,
) -> &'static str {
    if current_key == Some(column_key) {
        match direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

/// Piece of cell text, marked when it matches the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Подсветка совпадений в тексте (case-insensitive)
///
/// Splits `text` into matched and unmatched segments on char boundaries.
pub fn highlight_matches<'a>(text: &'a str, search_term: &str) -> Vec<Segment<'a>> {
    let needle = search_term.to_lowercase();
    if needle.is_empty() {
        return vec![Segment {
            text,
            matched: false,
        }];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], &needle) {
            Some(len) => {
                if pos > plain_start {
                    segments.push(Segment {
                        text: &text[plain_start..pos],
                        matched: false,
                    });
                }
                segments.push(Segment {
                    text: &text[pos..pos + len],
                    matched: true,
                });
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }

    segments
}

/// Byte length of the prefix of `text` whose lowercase form equals `needle`
fn match_len_at(text: &str, needle: &str) -> Option<usize> {
    let mut lowered = String::new();
    for (offset, ch) in text.char_indices() {
        lowered.extend(ch.to_lowercase());
        if !needle.starts_with(lowered.as_str()) {
            return None;
        }
        if lowered.len() == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}
