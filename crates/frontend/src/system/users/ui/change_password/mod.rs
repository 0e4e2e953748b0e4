use contracts::shared::validation::{FieldErrors, Validate};
use contracts::system::users::ChangePasswordForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::field_error::FieldErrorText;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::system::users::api;

#[component]
pub fn ChangePasswordDialog(
    user_id: i64,
    #[prop(into)]
    user_name: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let notifier = use_notifier();
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (saving, set_saving) = signal(false);

    let error_for = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let on_save = move |_| {
        let form = ChangePasswordForm {
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
        spawn_local(async move {
            match api::change_password(user_id, &form).await {
                Ok(()) => {
                    notifier.success("Contraseña actualizada correctamente");
                    on_close.run(());
                }
                Err(e) => notifier.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Contraseña"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <p class="modal-description">{format!("Modifica la contraseña de {}", user_name)}</p>

                    <div class="form__group">
                        <Label>"Nueva contraseña"</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                        <FieldErrorText message=error_for("password") />
                    </div>

                    <div class="form__group">
                        <Label>"Confirmar contraseña"</Label>
                        <Input
                            value=confirm_password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                        <FieldErrorText message=error_for("confirmPassword") />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
