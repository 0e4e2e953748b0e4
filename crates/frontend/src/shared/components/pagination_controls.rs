use crate::shared::icons::icon;
use crate::shared::query_params::{use_list_navigation, ListQuery};
use leptos::prelude::*;

/// Page clamped into `[1, total_pages]`; an empty result still has page 1
pub fn clamp_page(page: u32, total_pages: usize) -> u32 {
    let last = total_pages.max(1) as u32;
    page.clamp(1, last)
}

/// PaginationControls: first/previous/next/last over the URL `page` parameter.
///
/// Pages are 1-indexed. A click navigates to the same path with the new
/// page, which re-derives the list query and fetches again.
#[component]
pub fn PaginationControls(
    /// Current list query of the page
    #[prop(into)]
    query: Signal<ListQuery>,

    /// Total number of pages reported by the API
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items reported by the API
    #[prop(into)]
    total_count: Signal<usize>,
) -> impl IntoView {
    let navigate = use_list_navigation();
    let current = move || query.with(|q| q.page);
    let last = move || total_pages.get().max(1) as u32;

    let go_to = move |page: u32| {
        let next = query.with_untracked(|q| q.with_page(clamp_page(page, total_pages.get_untracked())));
        navigate(&next);
    };
    let go_first = go_to.clone();
    let go_prev = go_to.clone();
    let go_next = go_to.clone();
    let go_last = go_to;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_first(1)
                disabled=move || current() <= 1
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_prev(current().saturating_sub(1))
                disabled=move || current() <= 1
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current(), last(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_next(current() + 1)
                disabled=move || current() >= last()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_last(last())
                disabled=move || current() >= last()
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
