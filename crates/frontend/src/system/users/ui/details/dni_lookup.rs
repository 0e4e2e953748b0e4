use contracts::shared::validation::{FieldErrors, Validate};
use contracts::system::users::{DniQuery, DniRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::field_error::FieldErrorText;
use crate::shared::http::ApiError;
use crate::shared::icons::icon;
use crate::system::users::api;

/// Message shown for a failed lookup
fn lookup_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { message, .. } => message.clone(),
        _ => "Error en la consulta".to_string(),
    }
}

/// Looks a DNI up and hands the confirmed record back to the form
#[component]
pub fn DniLookupDialog(on_close: Callback<()>, on_confirm: Callback<DniRecord>) -> impl IntoView {
    let dni = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let result: RwSignal<Option<DniRecord>> = RwSignal::new(None);
    let server_error: RwSignal<Option<String>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);

    let search = move |_| {
        let query = DniQuery {
            dni: dni.get_untracked().trim().to_string(),
        };
        let found = query.validate();
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }
        result.set(None);
        server_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            match api::lookup_dni(&query.dni).await {
                Ok(record) if record.is_complete() => result.set(Some(record)),
                Ok(_) => server_error.set(Some("DNI inválido".to_string())),
                Err(e) => {
                    log::warn!("DNI lookup failed: {}", e);
                    server_error.set(Some(lookup_error_message(&e)));
                }
            }
            set_loading.set(false);
        });
    };

    let confirm = move |_| {
        if let Some(record) = result.get_untracked() {
            on_confirm.run(record);
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Consultar RENIEC"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="dni-lookup__search">
                        <div class="form__group">
                            <Input value=dni placeholder="DNI" />
                            <FieldErrorText message=Signal::derive(move || {
                                errors.with(|e| e.get("dni").map(str::to_string))
                            }) />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=search
                            disabled=Signal::derive(move || loading.get())
                        >
                            {move || if loading.get() { icon("loading") } else { icon("search") }}
                        </Button>
                    </div>

                    {move || server_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    {move || result.get().map(|r| view! {
                        <div class="dni-lookup__result">
                            <h3>"Resultado:"</h3>
                            <p>{format!("Nombres: {}", r.first_names)}</p>
                            <p>{format!("Apellidos: {}", r.last_names())}</p>
                        </div>
                    })}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=confirm
                        disabled=Signal::derive(move || result.with(|r| r.is_none()))
                    >
                        "Confirmar"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_message() {
        let err = ApiError::Status {
            status: 404,
            message: "DNI no encontrado".to_string(),
        };
        assert_eq!(lookup_error_message(&err), "DNI no encontrado");
        assert_eq!(
            lookup_error_message(&ApiError::Network("offline".to_string())),
            "Error en la consulta"
        );
    }
}
