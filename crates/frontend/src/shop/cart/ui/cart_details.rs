use leptos::prelude::*;

use crate::shared::number_format::format_money;
use crate::shop::cart::use_cart_store;

/// Item count and total of the cart
#[component]
pub fn CartDetails() -> impl IntoView {
    let cart = use_cart_store();

    view! {
        <dl class="cart-details">
            <div class="cart-details__row">
                <dt>"Productos"</dt>
                <dd>{move || cart.item_count().to_string()}</dd>
            </div>
            <div class="cart-details__row cart-details__row--total">
                <dt>"Total"</dt>
                <dd>{move || format_money(cart.total())}</dd>
            </div>
        </dl>
    }
}
