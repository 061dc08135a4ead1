use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager for the list tabs. The page size selector is shown only when
/// `on_page_size_change` is set.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    #[prop(into)] total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    #[prop(optional)] on_page_size_change: Option<Callback<usize>>,

    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            {on_page_size_change.map(|on_size| {
                let default_size = page_size_opts.first().copied().unwrap_or(10);
                view! {
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            let val = event_target_value(&ev).parse().unwrap_or(default_size);
                            on_size.run(val);
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {page_size_opts.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {format!("{} per page", size)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                }
            })}
        </div>
    }
}
