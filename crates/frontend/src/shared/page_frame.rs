//! PageFrame: root wrapper of every routed page.
//!
//! Sets two attributes on the root element:
//!   - `id` in the form `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`, one of the `PAGE_CAT_*` constants
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to `domain/a001_product/`.

use leptos::prelude::*;

/// Table with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Edit or create form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Card board (orders)
pub const PAGE_CAT_BOARD: &str = "board";

/// Customer-facing storefront page
pub const PAGE_CAT_SHOP: &str = "shop";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_BOARD => "page page--board",
        PAGE_CAT_SHOP => "page page--shop",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
