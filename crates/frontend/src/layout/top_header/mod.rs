//! TopHeader: sidebar toggle, store brand and the cart shortcut.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shop::cart::use_cart_store;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let cart = use_cart_store();

    let is_sidebar_visible = move || ctx.left_open.get();
    let item_count = move || cart.item_count();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Tienda"</span>
            </div>

            <div class="top-header__actions">
                <A href="/shop/cart" attr:class="top-header__icon-btn top-header__cart" attr:title="Carrito">
                    {icon("cart")}
                    <Show when=move || { item_count() > 0 }>
                        <span class="top-header__cart-count">{move || item_count().to_string()}</span>
                    </Show>
                </A>
            </div>
        </div>
    }
}
