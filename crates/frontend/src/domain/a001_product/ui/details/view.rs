use contracts::domain::a001_product::category::PRODUCT_CATEGORIES;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::ProductEditViewModel;
use crate::shared::components::field_error::FieldErrorText;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

const INVENTORY_PATH: &str = "/admin/inventory";

#[component]
pub fn ProductEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let vm = ProductEditViewModel::new();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    vm.load(id.clone(), notifier);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let image = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let navigate = navigate.clone();
        vm.save_command(image, notifier, move || {
            navigate(INVENTORY_PATH, Default::default())
        });
    };

    let current_image = move || {
        vm.original
            .with(|p| p.as_ref().and_then(|p| p.image().map(str::to_string)))
    };

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=format!("Editar producto {}", id) back_href=INVENTORY_PATH />

            <form class="page__content product-form" on:submit=on_submit>
                <div class="product-form__main">
                    <section class="card">
                        <h2 class="card__title">"Detalles"</h2>

                        <div class="form__group">
                            <Label>"Nombre"</Label>
                            <Input value=vm.name disabled=Signal::derive(move || vm.is_busy()) />
                            <FieldErrorText message=vm.error_for("name") />
                        </div>

                        <div class="form__group">
                            <Label>"Descripción"</Label>
                            <Textarea value=vm.description disabled=Signal::derive(move || vm.is_busy()) />
                            <FieldErrorText message=vm.error_for("description") />
                        </div>

                        <div class="form__group">
                            <Checkbox checked=vm.enabled label="Habilitado para la venta" />
                        </div>
                    </section>

                    <section class="card">
                        <h2 class="card__title">"Precio y stock"</h2>

                        <div class="form__group">
                            <Label>"Precio (S/)"</Label>
                            <Input value=vm.price input_type=InputType::Number />
                            <FieldErrorText message=vm.error_for("price") />
                        </div>

                        <div class="form__group">
                            <Label>"Límite por orden"</Label>
                            <Input value=vm.order_limit input_type=InputType::Number />
                            <FieldErrorText message=vm.error_for("order_limit") />
                        </div>

                        <div class="form__group">
                            <Label>"Categoría"</Label>
                            <Select value=vm.category>
                                <option value="">"Seleccionar"</option>
                                {PRODUCT_CATEGORIES
                                    .iter()
                                    .map(|c| view! { <option value=c.value>{c.name}</option> })
                                    .collect_view()}
                            </Select>
                            <FieldErrorText message=vm.error_for("category") />
                        </div>
                    </section>
                </div>

                <aside class="product-form__side">
                    <section class="card">
                        <h2 class="card__title">"Imagen"</h2>
                        {move || match current_image() {
                            Some(src) => view! { <img class="product-form__image" src=src alt="" /> }.into_any(),
                            None => view! { <div class="product-form__image--pending">"Sin imagen"</div> }.into_any(),
                        }}
                        <input type="file" accept="image/*" node_ref=file_input />
                    </section>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_busy()
                    >
                        {move || if vm.is_busy() {
                            icon("loading")
                        } else {
                            view! { "Guardar producto" }.into_any()
                        }}
                    </button>
                </aside>
            </form>
        </PageFrame>
    }
}
