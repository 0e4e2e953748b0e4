//! Storefront catalog: enabled products with "add to cart".

use contracts::domain::a001_product::category::category_name;
use contracts::domain::a001_product::Product;
use contracts::shop::cart::AddOutcome;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_product::api;
use crate::shared::components::list_filters::SearchByName;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifier, NoticeKind};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SHOP};
use crate::shared::query_params::{use_list_query, FilterParam};
use crate::shared::remote::use_remote_list;
use crate::shop::cart::use_cart_store;

/// The storefront never lists disabled products
const ENABLED_ONLY: &str = "true";

/// Notification for the result of adding `name` to the cart
fn add_notice(outcome: AddOutcome, name: &str) -> (NoticeKind, String) {
    match outcome {
        AddOutcome::Added => (NoticeKind::Success, format!("{} agregado al carrito", name)),
        AddOutcome::Incremented(qty) => (
            NoticeKind::Success,
            format!("{} en el carrito: {} unidades", name, qty),
        ),
        AddOutcome::AtLimit(limit) => (
            NoticeKind::Warning,
            format!("Límite por orden alcanzado ({}) para {}", limit, name),
        ),
        AddOutcome::Unavailable => (
            NoticeKind::Warning,
            format!("{} no está disponible", name),
        ),
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let query = use_list_query(FilterParam::Status);
    let remote = use_remote_list::<Product>(Signal::derive(move || {
        query.with(|q| api::list_path(&q.with_fixed_filter(ENABLED_ONLY)))
    }));

    let products = move || {
        remote
            .data
            .with(|d| d.as_ref().map(|d| d.data.clone()).unwrap_or_default())
    };

    view! {
        <PageFrame page_id="shop_catalog--shop" category=PAGE_CAT_SHOP>
            <div class="catalog__toolbar">
                <h1 class="page__title">{icon("store")}" Productos"</h1>
                <SearchByName query=query placeholder="Buscar productos..." />
            </div>

            <div class="catalog__grid">
                {move || {
                    if remote.loading.get() {
                        view! { <div class="catalog__loading">{icon("loading")}" Cargando..."</div> }.into_any()
                    } else if remote.data.with(|d| d.as_ref().map_or(true, |d| d.data.is_empty())) {
                        view! { <p class="catalog__empty">"No hay productos disponibles"</p> }.into_any()
                    } else {
                        view! {
                            <For
                                each=products
                                key=|p: &Product| p.id
                                children=move |product: Product| view! { <ProductCard product=product /> }
                            />
                        }.into_any()
                    }
                }}
            </div>

            <PaginationControls
                query=query
                total_pages=remote.total_pages()
                total_count=remote.total()
            />
        </PageFrame>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart_store();
    let notifier = use_notifier();
    let product_id = product.id;
    let order_limit = product.order_limit;
    let image = product.image().map(str::to_string);
    let price = format_money(product.price);
    let category = category_name(&product.category).to_string();
    let name = product.name.clone();
    let description = product.description.clone();

    let in_cart = move || cart.quantity_of(product_id);
    let at_limit = Signal::derive(move || in_cart() >= order_limit);

    let add = move |_| {
        let outcome = cart.add_product(&product);
        let (kind, text) = add_notice(outcome, &product.name);
        notifier.push(kind, text);
    };

    view! {
        <article class="product-card card">
            {match image {
                Some(src) => view! { <img class="product-card__image" src=src alt=name.clone() /> }.into_any(),
                None => view! { <div class="product-card__image product-card__image--pending">"Sin imagen"</div> }.into_any(),
            }}
            <div class="product-card__body">
                <span class="product-card__category">{category}</span>
                <h3 class="product-card__name">{name}</h3>
                <p class="product-card__description">{description}</p>
            </div>
            <div class="product-card__footer">
                <span class="product-card__price">{price}</span>
                <Show when=move || cart.contains(product_id)>
                    <Badge>{move || format!("{} en carrito", in_cart())}</Badge>
                </Show>
                <Button appearance=ButtonAppearance::Primary on_click=add disabled=at_limit>
                    {icon("plus")}
                    " Agregar"
                </Button>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_params::ListQuery;

    #[test]
    fn test_catalog_request_keeps_page() {
        let q = ListQuery::from_search("page=3&query=pan", FilterParam::Status);
        assert_eq!(
            api::list_path(&q.with_fixed_filter(ENABLED_ONLY)),
            "/productos/obtener-productos?page=3&query=pan&page_size=10&status=true"
        );
    }

    #[test]
    fn test_add_notice_kinds() {
        assert_eq!(add_notice(AddOutcome::Added, "Ceviche").0, NoticeKind::Success);
        assert_eq!(
            add_notice(AddOutcome::Incremented(2), "Ceviche").1,
            "Ceviche en el carrito: 2 unidades"
        );
        assert_eq!(add_notice(AddOutcome::AtLimit(3), "Ceviche").0, NoticeKind::Warning);
        assert_eq!(add_notice(AddOutcome::Unavailable, "Ceviche").0, NoticeKind::Warning);
    }
}
