mod order_card;

use contracts::domain::a002_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a002_order::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_BOARD};
use order_card::OrderCard;

/// Orders split into one column per status, in status order; empty columns are skipped
pub fn group_by_status(orders: &[Order]) -> Vec<(OrderStatus, Vec<Order>)> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| {
            let column: Vec<Order> = orders.iter().filter(|o| o.status == status).cloned().collect();
            (status, column)
        })
        .filter(|(_, column)| !column.is_empty())
        .collect()
}

/// Orders with a status change on the way
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PendingUpdates(HashSet<i64>);

impl PendingUpdates {
    /// Marks `id` as in flight; false if it already was
    pub fn begin(&mut self, id: i64) -> bool {
        self.0.insert(id)
    }

    pub fn finish(&mut self, id: i64) {
        self.0.remove(&id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }
}

#[component]
pub fn OrdersBoard() -> impl IntoView {
    let notifier = use_notifier();
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let pending = RwSignal::new(PendingUpdates::default());

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(data) => orders.set(data),
                Err(e) => notifier.error(e.to_string()),
            }
            set_loading.set(false);
        });
    };

    load_data();

    let advance = Callback::new(move |id: i64| {
        let Some(next) = orders.with_untracked(|list| {
            list.iter().find(|o| o.id == id).and_then(|o| o.status.next())
        }) else {
            return;
        };
        let mut started = false;
        pending.update(|p| started = p.begin(id));
        if !started {
            return;
        }
        spawn_local(async move {
            match api::update_status(id, next).await {
                Ok(()) => {
                    orders.update(|list| {
                        if let Some(order) = list.iter_mut().find(|o| o.id == id) {
                            order.status = next;
                        }
                    });
                    notifier.success(format!("Orden ORD-00{} actualizada a {}", id, next.label()));
                }
                Err(e) => notifier.error(e.to_string()),
            }
            pending.update(|p| p.finish(id));
        });
    });

    view! {
        <PageFrame page_id="a002_order--board" category=PAGE_CAT_BOARD>
            <PageHeader title="Órdenes">
                <Badge>{move || orders.with(|o| o.len()).to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </PageHeader>

            <div class="page__content order-board">
                {move || {
                    let columns = orders.with(|o| group_by_status(o));
                    if columns.is_empty() && !loading.get() {
                        return view! { <div class="order-board__empty">"No hay órdenes"</div> }.into_any();
                    }
                    columns
                        .into_iter()
                        .map(|(status, column)| view! {
                            <section class="order-board__column">
                                <h2 class="order-board__title">
                                    {format!("{} ({})", status.label(), column.len())}
                                </h2>
                                {column
                                    .into_iter()
                                    .map(|order| {
                                        let id = order.id;
                                        let busy = Signal::derive(move || pending.with(|p| p.contains(id)));
                                        view! { <OrderCard order=order busy=busy on_advance=advance /> }
                                    })
                                    .collect_view()}
                            </section>
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_order::aggregate::OrderCustomer;

    fn order(id: i64, status: OrderStatus) -> Order {
        Order {
            id,
            status,
            scheduled_at: "2024-05-01 12:30:00".to_string(),
            customer: OrderCustomer {
                first_name: "Ana".to_string(),
                last_name: "Torres".to_string(),
            },
            items: Vec::new(),
            total: 10.0,
        }
    }

    #[test]
    fn test_group_by_status_keeps_status_order() {
        let orders = vec![
            order(1, OrderStatus::Completada),
            order(2, OrderStatus::EnProceso),
            order(3, OrderStatus::EnProceso),
        ];
        let columns = group_by_status(&orders);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].0, OrderStatus::EnProceso);
        let ids: Vec<i64> = columns[0].1.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(columns[1].0, OrderStatus::Completada);
    }

    #[test]
    fn test_pending_update_blocks_repeat() {
        let mut pending = PendingUpdates::default();
        assert!(pending.begin(7));
        assert!(!pending.begin(7));
        assert!(pending.contains(7));
        assert!(pending.begin(8));
        pending.finish(7);
        assert!(!pending.contains(7));
        assert!(pending.begin(7));
    }

    #[test]
    fn test_group_by_status_empty() {
        assert!(group_by_status(&[]).is_empty());
    }
}
