use crate::domain::a001_product::ui::details::ProductEditPage;
use crate::domain::a001_product::ui::list::InventoryList;
use crate::domain::a002_order::ui::board::OrdersBoard;
use crate::domain::a003_payment::ui::list::SalesList;
use crate::layout::Shell;
use crate::shop::cart::ui::CartPage;
use crate::shop::catalog::CatalogPage;
use crate::system::users::ui::details::UserCreatePage;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Página no encontrada"</h1>
            <a href="/shop">"Volver a la tienda"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/shop" /> } />
                    <Route path=path!("/shop") view=CatalogPage />
                    <Route path=path!("/shop/cart") view=CartPage />
                    <Route path=path!("/admin/inventory") view=InventoryList />
                    <Route path=path!("/admin/products/edit/:id") view=ProductEditPage />
                    <Route path=path!("/admin/sales") view=SalesList />
                    <Route path=path!("/admin/orders") view=OrdersBoard />
                    <Route path=path!("/admin/users") view=UsersList />
                    <Route path=path!("/admin/users/create") view=UserCreatePage />
                </Routes>
            </Shell>
        </Router>
    }
}
