use leptos::prelude::*;

/// Modal message with a single OK button.
#[component]
pub fn AlertDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="alertdialog">
                <h3 class="modal-title">{title}</h3>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>"OK"</button>
                </div>
            </div>
        </div>
    }
}

/// Two-choice prompt: cancel or confirm. `on_answer` receives true on confirm.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_answer: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <h3 class="modal-title">{title}</h3>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_answer.run(false)>"Cancel"</button>
                    <button class="btn btn-delete" on:click=move |_| on_answer.run(true)>{confirm_label}</button>
                </div>
            </div>
        </div>
    }
}
