use contracts::shop::CreateOrderDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::notify::use_notifier;
use crate::shop::cart::{api, use_cart_store};

/// Places the order for the current cart and removes the ordered lines on success
#[component]
pub fn PayOrderButton() -> impl IntoView {
    let cart = use_cart_store();
    let notifier = use_notifier();
    let (paying, set_paying) = signal(false);

    let pay = move |_| {
        let ordered = cart.snapshot();
        let dto = match CreateOrderDto::from_cart(&ordered) {
            Ok(dto) => dto,
            Err(e) => {
                notifier.warning(e.to_string());
                return;
            }
        };
        set_paying.set(true);
        spawn_local(async move {
            match api::create_order(&dto).await {
                Ok(()) => {
                    cart.remove_ordered(&ordered);
                    notifier.success("Pedido realizado correctamente");
                }
                Err(e) => notifier.error(e.to_string()),
            }
            set_paying.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            class="cart__pay"
            on_click=pay
            disabled=Signal::derive(move || paying.get() || cart.is_empty())
        >
            {move || if paying.get() { "Procesando..." } else { "Pagar" }}
        </Button>
    }
}
