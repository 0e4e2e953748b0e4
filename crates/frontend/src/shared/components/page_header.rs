use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Title bar of a page with an optional back link and action slot
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Route of the parent page; renders a back arrow when set
    #[prop(optional)]
    back_href: Option<&'static str>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {back_href.map(|href| view! {
                    <A href=href attr:class="page__back" attr:title="Volver">
                        {icon("chevron-left")}
                    </A>
                })}
                <div class="page__header-text">
                    <h1 class="page__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
