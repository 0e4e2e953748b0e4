use contracts::domain::a001_product::category::category_name;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use std::cmp::Ordering;
use thaw::*;

use crate::domain::a001_product::api;
use crate::shared::components::list_filters::{FilterSelect, LimitToggle, SearchByName};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney, TableSkeleton};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, use_sortable_data, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_params::{use_list_query, FilterParam};
use crate::shared::remote::use_remote_list;

const COLUMNS: usize = 8;

/// `status` URL values understood by the products endpoint
const STATUS_OPTIONS: [(&str, &str); 2] = [("true", "Habilitados"), ("false", "Deshabilitados")];

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => cmp_text(&self.name, &other.name),
            "category" => cmp_text(&self.category, &other.category),
            "price" => cmp_f64(self.price, other.price),
            "order_limit" => self.order_limit.cmp(&other.order_limit),
            "enabled" => self.enabled.cmp(&other.enabled),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let query = use_list_query(FilterParam::Status);
    let remote = use_remote_list::<Product>(Signal::derive(move || query.with(api::list_path)));
    let rows = use_sortable_data::<Product>();

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
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Inventario" subtitle="Productos de la tienda">
                <Badge>{move || total.get().to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| remote.reload()
                    disabled=Signal::derive(move || remote.loading.get())
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <SearchByName query=query />
                        <LimitToggle query=query />
                        <FilterSelect query=query label="Estado" options=STATUS_OPTIONS.to_vec() />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Id" sort_field="id" min_width=60.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                <SortableHeaderCell label="Nombre" sort_field="name" min_width=180.0
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Categoría" sort_field="category"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Precio" sort_field="price" align="right"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Límite" sort_field="order_limit" align="right"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="Estado" sort_field="enabled"
                                    current_sort_field=sort_key sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
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
                                            key=|p: &Product| p.id
                                            children=move |product: Product| view! { <ProductRow product=product /> }
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

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let edit_href = format!("/admin/products/edit/{}", product.id);
    let image = product.image().map(str::to_string);
    let price = product.price;

    view! {
        <TableRow>
            <TableCell>{product.id.to_string()}</TableCell>
            <TableCell>
                {image.map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{product.name.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{category_name(&product.category).to_string()}</TableCell>
            <TableCellMoney value=Signal::derive(move || Some(price)) />
            <TableCell class="text-right">{product.order_limit.to_string()}</TableCell>
            <TableCell>
                {if product.enabled {
                    view! { <span class="badge badge--success">"Habilitado"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--neutral">"Deshabilitado"</span> }.into_any()
                }}
            </TableCell>
            <TableCell>
                <A href=edit_href attr:title="Editar" attr:class="table__action">
                    {icon("edit")}
                </A>
            </TableCell>
        </TableRow>
    }
}
