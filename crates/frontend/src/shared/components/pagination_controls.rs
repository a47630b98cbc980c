use crate::shared::icons::icon;
use crate::shared::pagination::{
    next_page, page_count as count_pages, page_range, page_window, prev_page, PageChange,
    PageDirective,
};
use leptos::prelude::*;

/// Build the change event for `page`, with the item window when it is known
fn change_for(page: usize, total_count: Option<usize>, page_size: Option<usize>) -> PageChange {
    let window = match (total_count, page_size) {
        (Some(count), Some(size)) if size > 0 => Some(page_window(page, size, count)),
        _ => None,
    };
    PageChange { page, window }
}

/// Paginate component - numbered pagination bar
///
/// Either `page_count` or both `total_count` and `page_size` must be given.
#[component]
pub fn Paginate(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<usize>,

    /// Total number of pages
    #[prop(optional, into)]
    page_count: Option<Signal<usize>>,

    /// Total count of items
    #[prop(optional, into)]
    total_count: Option<Signal<usize>>,

    /// Items per page
    #[prop(optional, into)]
    page_size: Option<Signal<usize>>,

    /// Callback when page changes
    on_change: Callback<PageChange>,
) -> impl IntoView {
    let count = Signal::derive(move || {
        if let Some(pages) = page_count {
            return pages.get();
        }
        match (total_count, page_size) {
            (Some(total), Some(size)) => count_pages(total.get(), size.get()),
            _ => {
                log::warn!("Paginate needs page_count or total_count and page_size");
                0
            }
        }
    });

    let go_to = move |target: usize| {
        let change = change_for(
            target,
            total_count.map(|t| t.get_untracked()),
            page_size.map(|s| s.get_untracked()),
        );
        on_change.run(change);
    };

    let plan = Memo::new(move |_| page_range(page.get(), count.get()));

    // self-correct an out-of-range page
    Effect::new(move |_| {
        if let Some(target) = plan.with(|p| p.correction) {
            go_to(target);
        }
    });

    view! {
        <ul class="pagination">
            {move || {
                let current = page.get();
                let pages = count.get();
                plan.get()
                    .directives
                    .into_iter()
                    .map(|directive| match directive {
                        PageDirective::Prev => view! {
                            <li>
                                <button
                                    class="pagination-btn"
                                    title="Previous page"
                                    on:click=move |_| {
                                        if let Some(target) = prev_page(current, pages) {
                                            go_to(target);
                                        }
                                    }
                                >
                                    {icon("chevron-left")}
                                </button>
                            </li>
                        }
                        .into_any(),
                        PageDirective::Next => view! {
                            <li>
                                <button
                                    class="pagination-btn"
                                    title="Next page"
                                    on:click=move |_| {
                                        if let Some(target) = next_page(current, pages) {
                                            go_to(target);
                                        }
                                    }
                                >
                                    {icon("chevron-right")}
                                </button>
                            </li>
                        }
                        .into_any(),
                        PageDirective::Ellipsis => view! {
                            <li>
                                <button class="pagination-btn" disabled=true>"…"</button>
                            </li>
                        }
                        .into_any(),
                        PageDirective::Page { number, current } => view! {
                            <li>
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--current=current
                                    on:click=move |_| go_to(number)
                                >
                                    {number.to_string()}
                                </button>
                            </li>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
        </ul>
    }
}
