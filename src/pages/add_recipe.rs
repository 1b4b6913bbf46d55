use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, FieldErrors, RecipeDraft};
use crate::components::dialog::AlertDialog;
use crate::components::field_error::FieldError;
use crate::state::PendingRecipe;

const COURSES: [(&str, &str); 3] = [("starter", "Starter"), ("main", "Main"), ("dessert", "Dessert")];

/// Live price preview, `R 0.00` until the input parses.
fn price_preview(raw: &str) -> String {
    let value = raw.trim().parse::<f64>().ok().filter(|p| p.is_finite()).unwrap_or(0.0);
    format!("R {:.2}", value)
}

#[component]
pub fn AddRecipePage() -> impl IntoView {
    let pending = expect_context::<PendingRecipe>();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (course, set_course) = signal(String::from("starter"));
    let (price, set_price) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (show_invalid, set_show_invalid) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    let reset_form = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_price.set(String::new());
        set_course.set(String::from("starter"));
        set_image.set(String::new());
        set_errors.set(FieldErrors::default());
    };

    let submit = move |_| {
        let image_ref = image.get();
        let draft = RecipeDraft {
            name: name.get(),
            description: description.get(),
            course: course.get(),
            price: price.get(),
            image: if image_ref.trim().is_empty() { None } else { Some(image_ref) },
        };
        set_is_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match commands::build_recipe(draft).await {
                Ok(recipe) => {
                    pending.offer(recipe);
                    reset_form();
                    navigate("/recipes", Default::default());
                }
                Err(field_errors) => {
                    let _ = set_errors.try_set(field_errors);
                    let _ = set_show_invalid.try_set(true);
                }
            }
            let _ = set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="page add-recipe-page">
            <h2>"Add New Dish"</h2>

            <div class="form-group">
                <input
                    type="text"
                    placeholder="Dish Name"
                    class="input"
                    class:input-invalid=move || errors.get().name.is_some()
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.get().name) />
            </div>

            <div class="form-group">
                <textarea
                    placeholder="Description"
                    class="input textarea"
                    class:input-invalid=move || errors.get().description.is_some()
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <FieldError message=Signal::derive(move || errors.get().description) />
            </div>

            <div class="form-group">
                <select
                    class="input"
                    prop:value=move || course.get()
                    on:change=move |ev| set_course.set(event_target_value(&ev))
                >
                    {COURSES.iter().map(|(value, label)| {
                        view! { <option value=*value>{*label}</option> }
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-group">
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Price"
                    class="input"
                    class:input-invalid=move || errors.get().price.is_some()
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <span class="price-preview">{move || price_preview(&price.get())}</span>
                <FieldError message=Signal::derive(move || errors.get().price) />
            </div>

            <div class="form-group">
                <input
                    type="text"
                    placeholder="Image path or URL (optional)"
                    class="input"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
                <Show when=move || !image.get().trim().is_empty()>
                    <img class="image-preview" src=move || image.get() alt="" />
                </Show>
            </div>

            <button
                class="btn btn-primary"
                on:click=submit
                disabled=move || is_submitting.get()
            >
                "Add Dish"
            </button>

            <Show when=move || show_invalid.get()>
                <AlertDialog
                    title="Invalid Input"
                    message="Please correct the errors and try again."
                    on_close=move |_| set_show_invalid.set(false)
                />
            </Show>
        </div>
    }
}
