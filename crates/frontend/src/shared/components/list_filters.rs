//! Filter inputs of the admin lists.
//!
//! Every filter writes to the URL; the page re-derives its [`ListQuery`]
//! from there. Changing any of them returns the list to page 1.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::{LIMIT_OPTIONS, SEARCH_DEBOUNCE_MS};
use crate::shared::icons::icon;
use crate::shared::query_params::{use_list_navigation, ListQuery};

/// Search box; the URL is updated once typing pauses
#[component]
pub fn SearchByName(
    #[prop(into)]
    query: Signal<ListQuery>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let navigate = use_list_navigation();
    let text = RwSignal::new(query.with_untracked(|q| q.query.clone()));
    let generation = StoredValue::new(0u64);

    // back/forward navigation changes the URL under the input
    Effect::new(move |_| {
        let from_url = query.with(|q| q.query.clone());
        if text.get_untracked().trim() != from_url {
            text.set(from_url);
        }
    });

    Effect::new(move |prev: Option<()>| {
        let typed = text.get();
        if prev.is_none() {
            return;
        }
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() != ticket {
                return;
            }
            let current = query.get_untracked();
            if current.query != typed.trim() {
                navigate(&current.with_query(&typed));
            }
        });
    });

    view! {
        <div class="filter__search">
            {icon("search")}
            <Input
                value=text
                placeholder=placeholder.unwrap_or_else(|| "Buscar por nombre...".to_string())
            />
        </div>
    }
}

/// Page size switch (10/20/50/100)
#[component]
pub fn LimitToggle(#[prop(into)] query: Signal<ListQuery>) -> impl IntoView {
    let navigate = use_list_navigation();

    view! {
        <div class="filter__limit">
            <span class="filter__label">"Mostrar"</span>
            {LIMIT_OPTIONS
                .iter()
                .map(|&limit| {
                    let navigate = navigate.clone();
                    view! {
                        <button
                            class="filter__toggle"
                            class:filter__toggle--active=move || query.with(|q| q.limit == limit)
                            on:click=move |_| navigate(&query.get_untracked().with_limit(limit))
                        >
                            {limit.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Categorical filter over the list's `status`/`method` parameter.
/// `options` are `(value, label)` pairs; the "all" entry is added here.
#[component]
pub fn FilterSelect(
    #[prop(into)]
    query: Signal<ListQuery>,
    #[prop(into)]
    label: String,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let navigate = use_list_navigation();

    view! {
        <label class="filter__select">
            <span class="filter__label">{label}</span>
            <select
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    navigate(&query.get_untracked().with_filter(&value));
                }
                prop:value=move || query.with(|q| q.filter.clone())
            >
                <option value=crate::config::FILTER_ALL>"Todos"</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
