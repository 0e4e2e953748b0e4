use leptos::prelude::*;
use leptos_router::components::A;

use super::cart_details::CartDetails;
use super::cart_table::CartTable;
use super::pay_order_button::PayOrderButton;
use super::payment_method_selector::PaymentMethodSelector;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SHOP};

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <PageFrame page_id="shop_cart--shop" category=PAGE_CAT_SHOP>
            <div class="cart">
                <section class="cart__lines card">
                    <p class="cart__hint">
                        "Confirma las cantidades de cada producto que desees."
                    </p>
                    <h2 class="card__title">{icon("cart")}" Tu carrito"</h2>
                    <CartTable />
                </section>

                <aside class="cart__summary card">
                    <h2 class="card__title">"Detalles"</h2>
                    <p class="card__description">
                        "Asegúrate de revisar todos los detalles antes de continuar con el pago."
                    </p>
                    <CartDetails />
                    <PaymentMethodSelector />
                    <div class="cart__actions">
                        <A href="/shop" attr:class="button button--secondary">"Continuar comprando"</A>
                        <PayOrderButton />
                    </div>
                </aside>
            </div>
        </PageFrame>
    }
}
