use leptos::prelude::*;

/// Inline validation message under a form field. Renders nothing when `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! { <span class="field-error">{m}</span> }
        })
    }
}
