use contracts::domain::a003_payment::PaymentMethod;
use leptos::prelude::*;

use crate::shop::cart::use_cart_store;

#[component]
pub fn PaymentMethodSelector() -> impl IntoView {
    let cart = use_cart_store();

    view! {
        <fieldset class="payment-methods">
            <legend>"Método de pago"</legend>
            {PaymentMethod::SELECTABLE
                .into_iter()
                .map(|method| view! {
                    <label class="payment-methods__option">
                        <input
                            type="radio"
                            name="payment-method"
                            value=method.as_str()
                            prop:checked=move || cart.payment_method() == Some(method)
                            on:change=move |_| cart.set_payment_method(Some(method))
                        />
                        {method.label()}
                    </label>
                })
                .collect_view()}
        </fieldset>
    }
}
