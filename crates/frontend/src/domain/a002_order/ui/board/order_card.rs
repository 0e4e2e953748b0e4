use contracts::domain::a002_order::{Order, OrderStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::number_format::format_money;

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::EnProceso => "badge badge--primary",
        OrderStatus::Recoger => "badge badge--warning",
        OrderStatus::Completada => "badge badge--success",
        OrderStatus::Cancelada | OrderStatus::Abandonada => "badge badge--error",
    }
}

#[component]
pub fn OrderCard(
    order: Order,
    /// A status change for this order is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_advance: Callback<i64>,
) -> impl IntoView {
    let id = order.id;
    let can_advance = order.can_advance();
    let item_count = order.items.len();

    view! {
        <article class="order-card">
            <header class="order-card__header">
                <span class="order-card__code">{format!("ORD-00{}", order.id)}</span>
                <span class=status_class(order.status)>{order.status.label()}</span>
            </header>

            <div class="order-card__body">
                <div class="order-card__line">{icon("timer")}<span>{order.scheduled_time()}</span></div>
                <div class="order-card__line">{icon("user")}<span>{order.customer_name()}</span></div>
                <div class="order-card__items-title">{format!("Productos: {}", item_count)}</div>
                <ul class="order-card__items">
                    {order
                        .items
                        .iter()
                        .map(|item| view! {
                            <li>
                                {format!("{} x{} ({})", item.product_name, item.quantity, format_money(item.price))}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>

            <footer class="order-card__footer">
                <span class="order-card__total">
                    {icon("dollar")}
                    {format!("Total: {}", format_money(order.total))}
                </span>
                {can_advance.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        attr:title="Avanzar estado"
                        disabled=busy
                        on_click=move |_| on_advance.run(id)
                    >
                        {move || if busy.get() { icon("loading") } else { icon("check") }}
                    </Button>
                })}
            </footer>
        </article>
    }
}
