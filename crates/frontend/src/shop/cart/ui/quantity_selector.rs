use contracts::shop::CartItem;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shop::cart::use_cart_store;

/// `current + delta` when it stays inside `[1, limit]`
fn step(current: u32, delta: i32, limit: u32) -> Option<u32> {
    let next = current.checked_add_signed(delta)?;
    (1..=limit).contains(&next).then_some(next)
}

/// Typed quantity when it is a whole number inside `[1, limit]`
fn parse_quantity(input: &str, limit: u32) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|q| (1..=limit).contains(q))
}

/// ±1 buttons and a numeric input bound to one cart line.
/// Out-of-range input is ignored; the cart is never asked for such a value.
#[component]
pub fn QuantitySelector(item: CartItem) -> impl IntoView {
    let cart = use_cart_store();
    let product_id = item.product_id;
    let limit = item.order_limit;
    // the catalog can change the line too
    let count = Signal::derive(move || cart.quantity_of(product_id));

    let apply = move |quantity: u32| {
        cart.update_product_quantity(product_id, quantity);
    };

    view! {
        <div class="quantity-selector">
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || count.get() <= 1)
                on_click=move |_| {
                    if let Some(q) = step(count.get_untracked(), -1, limit) {
                        apply(q);
                    }
                }
            >
                {icon("minus")}
            </Button>
            <input
                type="number"
                class="quantity-selector__input"
                min="1"
                max=limit.to_string()
                prop:value=move || count.get().to_string()
                on:input=move |ev| {
                    if let Some(q) = parse_quantity(&event_target_value(&ev), limit) {
                        apply(q);
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || count.get() >= limit)
                on_click=move |_| {
                    if let Some(q) = step(count.get_untracked(), 1, limit) {
                        apply(q);
                    }
                }
            >
                {icon("plus")}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_range() {
        assert_eq!(step(1, -1, 5), None);
        assert_eq!(step(2, -1, 5), Some(1));
        assert_eq!(step(4, 1, 5), Some(5));
        assert_eq!(step(5, 1, 5), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3", 5), Some(3));
        assert_eq!(parse_quantity(" 5 ", 5), Some(5));
        assert_eq!(parse_quantity("0", 5), None);
        assert_eq!(parse_quantity("6", 5), None);
        assert_eq!(parse_quantity("2.5", 5), None);
        assert_eq!(parse_quantity("", 5), None);
    }
}
