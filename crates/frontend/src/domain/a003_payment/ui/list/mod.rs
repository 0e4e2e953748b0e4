use contracts::domain::a003_payment::{Payment, PaymentMethod};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a003_payment::api;
use crate::shared::components::list_filters::{FilterSelect, LimitToggle, SearchByName};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney, TableSkeleton};
use crate::shared::list_utils::{cmp_f64, use_sortable_data, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_params::{use_list_query, FilterParam};
use crate::shared::remote::use_remote_list;

const COLUMNS: usize = 6;

impl Sortable for Payment {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "total" => cmp_f64(self.total, other.total),
            _ => Ordering::Equal,
        }
    }
}

fn method_options() -> Vec<(&'static str, &'static str)> {
    PaymentMethod::SELECTABLE
        .iter()
        .map(|m| (m.as_str(), m.label()))
        .collect()
}

#[component]
pub fn SalesList() -> impl IntoView {
    let query = use_list_query(FilterParam::Method);
    let remote = use_remote_list::<Payment>(Signal::derive(move || query.with(api::list_path)));
    let rows = use_sortable_data::<Payment>();

    Effect::new(move |_| {
        if let Some(page) = remote.data.get() {
            rows.update(|r| r.update_data(page.data));
        }
    });

    let total = remote.total();
    let skeleton_rows = Signal::derive(move || {
        let limit = query.with(|q| q.limit as usize);
        match total.get() {
            0 => limit,
            t => limit.min(t),
        }
    });
    let sort_key = Signal::derive(move || rows.with(|r| r.sort_key().to_string()));
    let sort_ascending = Signal::derive(move || rows.with(|r| r.is_ascending()));
    let on_sort = Callback::new(move |field: String| rows.update(|r| r.sort(&field)));

    view! {
        <PageFrame page_id="a003_payment--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Pagos"
                subtitle=Signal::derive(move || Some(format!("Total de pagos: {}", total.get())))
             />

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <SearchByName query=query placeholder="Buscar por transacción..." />
                        <LimitToggle query=query />
                        <FilterSelect query=query label="Método" options=method_options() />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Id" sort_field="id" min_width=60.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Transacción"</TableHeaderCell>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Código cliente"</TableHeaderCell>
                                <SortableHeaderCell label="Monto" sort_field="total" align="right"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell>"Método"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if remote.loading.get() {
                                    view! { <TableSkeleton rows=skeleton_rows columns=COLUMNS /> }.into_any()
                                } else if rows.with(|r| r.is_empty()) {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS.to_string()>
                                                "No hay datos disponibles"
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    view! {
                                        <For
                                            each=move || rows.with(|r| r.items().to_vec())
                                            key=|p: &Payment| p.id
                                            children=move |payment: Payment| {
                                                let amount = payment.total;
                                                view! {
                                                    <TableRow>
                                                        <TableCell>{payment.id.to_string()}</TableCell>
                                                        <TableCell>{payment.transaction}</TableCell>
                                                        <TableCell>{payment.created_at.unwrap_or_default()}</TableCell>
                                                        <TableCell>{payment.customer_code.unwrap_or_default()}</TableCell>
                                                        <TableCellMoney value=Signal::derive(move || Some(amount)) />
                                                        <TableCell>{payment.method.label()}</TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    }.into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    query=query
                    total_pages=remote.total_pages()
                    total_count=total
                />
            </div>
        </PageFrame>
    }
}
