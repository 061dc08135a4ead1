//! List helpers shared by the tab panels: search, sort, pagination and a
//! debounced search box.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Rows that can be matched against a free-text filter
pub trait Searchable {
    /// `filter` is already trimmed and lower-cased
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive containment, `None` never matches
pub fn field_contains(value: Option<&str>, filter: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(filter))
}

/// Empty values sort last regardless of direction
pub fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.filter(|s| !s.is_empty()), b.filter(|s| !s.is_empty())) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based, clamped into range
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Cut one page out of `items`. An out-of-range page shows the last one.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);

    Page {
        items: items[start.min(end)..end].to_vec(),
        page,
        total_pages,
        total_count,
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // dropping a Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    on_cleanup(move || pending.set_value(None));

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input--active=move || !value.get().trim().is_empty()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            field_contains(Some(self.0), filter) || field_contains(self.1, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "tag" => compare_optional(self.1, other.1),
                _ => compare_optional(Some(self.0), Some(other.0)),
            }
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trims() {
        let rows = vec![Row("Nebraska", Some("Big Ten")), Row("Texas", Some("SEC"))];
        assert_eq!(filter_list(rows.clone(), "  big "), vec![rows[0].clone()]);
        assert_eq!(filter_list(rows.clone(), "").len(), 2);
        assert!(filter_list(rows, "pac").is_empty());
    }

    #[test]
    fn test_sort_puts_empty_values_last() {
        let mut rows = vec![Row("b", None), Row("a", Some("z")), Row("c", Some("m"))];
        sort_list(&mut rows, "tag", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["c", "a", "b"]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (10..20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);

        let last = paginate(&items, 9, 10);
        assert_eq!(last.page, 2);
        assert_eq!(last.items.len(), 5);

        let empty = paginate::<u32>(&[], 3, 10);
        assert_eq!((empty.page, empty.total_pages), (0, 1));
        assert!(empty.items.is_empty());
    }
}
