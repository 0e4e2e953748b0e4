use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NotificationHost, Notifier};
use crate::shop::cart::provide_cart_store;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(Notifier::new());
    // restored from localStorage before any page reads it
    provide_cart_store();

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
