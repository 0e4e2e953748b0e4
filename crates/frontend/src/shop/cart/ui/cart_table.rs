use contracts::shop::CartItem;
use leptos::prelude::*;
use thaw::*;

use super::quantity_selector::QuantitySelector;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shop::cart::use_cart_store;

fn line_subtotal(unit_price: f64, quantity: u32) -> f64 {
    unit_price * quantity as f64
}

#[component]
pub fn CartTable() -> impl IntoView {
    let cart = use_cart_store();

    view! {
        <Show
            when=move || !cart.is_empty()
            fallback=|| view! {
                <div class="cart__empty">"Tu carrito está vacío"</div>
            }
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>""</TableHeaderCell>
                        <TableHeaderCell>"Producto"</TableHeaderCell>
                        <TableHeaderCell>"Precio"</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || cart.items()
                        key=|item: &CartItem| item.product_id
                        children=move |item: CartItem| {
                            let product_id = item.product_id;
                            let unit_price = item.unit_price;
                            let name = item.name.clone();
                            let image = item.image_url.clone();
                            let subtotal = move || format_money(line_subtotal(unit_price, cart.quantity_of(product_id)));
                            view! {
                                <TableRow>
                                    <TableCell>
                                        {image.map(|src| view! {
                                            <img class="cart__thumb" src=src alt="" />
                                        })}
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{format_money(unit_price)}</TableCell>
                                    <TableCell>
                                        <QuantitySelector item=item />
                                    </TableCell>
                                    <TableCell>{subtotal}</TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            attr:title="Quitar"
                                            on_click=move |_| {
                                                cart.remove_product(product_id);
                                            }
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line_subtotal(10.0, 2), 20.0);
        assert_eq!(line_subtotal(3.5, 0), 0.0);
    }
}
