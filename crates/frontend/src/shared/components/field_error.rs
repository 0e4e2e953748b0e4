use leptos::prelude::*;

/// Inline validation message under a form field
#[component]
pub fn FieldErrorText(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <p class="form__error">{m}</p> })}
    }
}
