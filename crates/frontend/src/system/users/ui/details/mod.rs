mod dni_lookup;

use contracts::shared::validation::{FieldErrors, Validate};
use contracts::system::users::{UserForm, ROLE_ADMIN, ROLE_CLIENT, STATUS_ACTIVE, STATUS_INACTIVE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::components::field_error::FieldErrorText;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::users::api;
use dni_lookup::DniLookupDialog;

const USERS_PATH: &str = "/admin/users";

#[component]
pub fn UserCreatePage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();

    let dni = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let role = RwSignal::new(ROLE_ADMIN.to_string());
    let status = RwSignal::new(STATUS_ACTIVE.to_string());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);
    let (show_lookup, set_show_lookup) = signal(false);

    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = UserForm {
            dni: dni.get_untracked().trim().to_string(),
            name: name.get_untracked().trim().to_string(),
            last_name: last_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            number: number.get_untracked().trim().to_string(),
            role: role.get_untracked(),
            status: status.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let found = form.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        set_saving.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_user(&form).await {
                Ok(()) => {
                    notifier.success("Usuario creado correctamente");
                    navigate(USERS_PATH, Default::default());
                }
                Err(e) => notifier.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let on_lookup_confirm = Callback::new(move |record| {
        let mut form = UserForm::default();
        form.apply_dni_record(&record);
        dni.set(form.dni);
        name.set(form.name);
        last_name.set(form.last_name);
    });

    view! {
        <PageFrame page_id="sys_users--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Nuevo usuario" back_href=USERS_PATH />

            <form class="page__content user-form" on:submit=on_submit>
                <section class="card user-form__status">
                    <h2 class="card__title">"Estado"</h2>
                    <Select value=status>
                        <option value=STATUS_ACTIVE>"Activo"</option>
                        <option value=STATUS_INACTIVE>"Inactivo"</option>
                    </Select>
                    <FieldErrorText message=error_for("status") />
                </section>

                <section class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Detalles"</h2>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| set_show_lookup.set(true)
                        >
                            "Consultar RENIEC"
                        </Button>
                    </div>

                    <div class="form__group">
                        <Label>"DNI"</Label>
                        <Input value=dni />
                        <FieldErrorText message=error_for("dni") />
                    </div>
                    <div class="form__group">
                        <Label>"Nombres"</Label>
                        <Input value=name />
                        <FieldErrorText message=error_for("name") />
                    </div>
                    <div class="form__group">
                        <Label>"Apellidos"</Label>
                        <Input value=last_name />
                        <FieldErrorText message=error_for("lastName") />
                    </div>
                    <div class="form__group">
                        <Label>"Correo"</Label>
                        <Input value=email input_type=InputType::Email />
                        <FieldErrorText message=error_for("email") />
                    </div>
                    <div class="form__group">
                        <Label>"Celular"</Label>
                        <Input value=number input_type=InputType::Tel />
                        <FieldErrorText message=error_for("number") />
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Acceso"</h2>
                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <Select value=role>
                            <option value=ROLE_ADMIN>"Administrador"</option>
                            <option value=ROLE_CLIENT>"Cliente"</option>
                        </Select>
                        <FieldErrorText message=error_for("role") />
                    </div>
                    <div class="form__group">
                        <Label>"Contraseña"</Label>
                        <Input value=password input_type=InputType::Password />
                        <FieldErrorText message=error_for("password") />
                    </div>
                    <div class="form__group">
                        <Label>"Confirmar contraseña"</Label>
                        <Input value=confirm_password input_type=InputType::Password />
                        <FieldErrorText message=error_for("confirmPassword") />
                    </div>
                </section>

                <button type="submit" class="button button--primary" disabled=move || saving.get()>
                    {move || if saving.get() {
                        icon("loading")
                    } else {
                        view! { "Crear usuario" }.into_any()
                    }}
                </button>
            </form>

            <Show when=move || show_lookup.get()>
                <DniLookupDialog
                    on_close=Callback::new(move |_| set_show_lookup.set(false))
                    on_confirm=on_lookup_confirm
                />
            </Show>
        </PageFrame>
    }
}
