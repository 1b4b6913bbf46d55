use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::dialog::AlertDialog;
use crate::state::{restore_if_empty, SessionContext};

/// Same pattern as the backend `validate_email`, used for the inline hint
/// and to pick the alert title.
fn looks_like_email(email: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    RE.is_match(email)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (remember_me, set_remember_me) = signal(false);
    let (is_loading, set_is_loading) = signal(false);
    let (alert, set_alert) = signal::<Option<(String, String)>>(None);

    // Pre-fill remembered credentials once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_remembered_login().await {
                // Leave the form alone if the user started typing first
                Ok(Some(saved)) => {
                    if !password.try_get_untracked().unwrap_or_default().is_empty() {
                        return;
                    }
                    let typed = email.try_get_untracked().unwrap_or_default();
                    if let Some(email_value) = restore_if_empty(&typed, saved.email) {
                        let _ = set_email.try_set(email_value);
                        let _ = set_password.try_set(saved.password);
                        let _ = set_remember_me.try_set(true);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    leptos::logging::error!("Failed to load credentials: {}", e);
                }
            }
        });
    });

    let email_invalid = move || {
        let e = email.get();
        !e.is_empty() && !looks_like_email(&e)
    };

    let do_login = move |_| {
        let e = email.get();
        let p = password.get();
        if e.is_empty() || p.is_empty() {
            set_alert.set(Some(("Error".to_string(), "Please fill in all fields".to_string())));
            return;
        }
        if !looks_like_email(&e) {
            set_alert.set(Some((
                "Invalid Email".to_string(),
                "Please enter a valid email address".to_string(),
            )));
            return;
        }

        set_is_loading.set(true);
        let remember = remember_me.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = commands::login(&e, &p, remember).await;
            set_is_loading.set(false);
            match result {
                Ok(()) => {
                    session.set_logged_in.set(true);
                    navigate("/home", Default::default());
                }
                Err(msg) => {
                    set_alert.set(Some(("Login Failed".to_string(), msg)));
                }
            }
        });
    };

    view! {
        <div class="page login-page">
            <div class="login-card">
                <h2>"Login"</h2>

                <div class="form-group">
                    <input
                        type="email"
                        placeholder="Email"
                        class="input"
                        class:input-invalid=email_invalid
                        autocapitalize="none"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <Show when=email_invalid>
                        <span class="field-error">"Please enter a valid email address"</span>
                    </Show>
                </div>

                <div class="form-group input-row">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="Password"
                        class="input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn-icon"
                        on:click=move |_| set_show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>

                <label class="remember-me">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |_| set_remember_me.update(|v| *v = !*v)
                    />
                    "Remember Me"
                </label>

                <button
                    class="btn btn-primary"
                    on:click=do_login
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                </button>
            </div>

            {move || {
                alert.get().map(|(title, message)| {
                    view! {
                        <AlertDialog
                            title=title
                            message=message
                            on_close=move |_| set_alert.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("chef@example.com"));
        assert!(looks_like_email("a@.b.c"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("chef@example"));
        assert!(!looks_like_email("chef @example.com"));
        assert!(!looks_like_email("a@b@c.d"));
    }
}
