use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Recipe};
use crate::components::dialog::ConfirmDialog;
use crate::components::recipe_card::RecipeCard;
use crate::state::{restore_if_empty, PendingRecipe};

const SEARCH_PREFERENCE: &str = "recipe_search";

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let pending = expect_context::<PendingRecipe>();
    let navigate = use_navigate();

    let (recipes, set_recipes) = signal::<Vec<Recipe>>(vec![]);
    let (loading, set_loading) = signal(true);
    let (search_query, set_search_query) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<String>>(None);

    // Load the catalog, then append any recipe handed over by Add-Recipe
    Effect::new(move |_| {
        let incoming = pending.take();
        spawn_local(async move {
            if let Ok(Some(saved)) = commands::get_preference(SEARCH_PREFERENCE).await {
                let typed = search_query.try_get_untracked().unwrap_or_default();
                if let Some(saved) = restore_if_empty(&typed, saved) {
                    let _ = set_search_query.try_set(saved);
                }
            }

            match commands::list_recipes().await {
                Ok(list) => {
                    let _ = set_recipes.try_set(list);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(format!("Failed to load recipes: {}", e)));
                }
            }
            let _ = set_loading.try_set(false);

            if let Some(recipe) = incoming {
                match commands::add_recipe(recipe).await {
                    Ok(list) => {
                        let _ = set_recipes.try_set(list);
                    }
                    Err(e) => {
                        let _ = set_error.try_set(Some(format!("Failed to add recipe: {}", e)));
                    }
                }
            }
        });
    });

    // Same rule as the backend filter_recipes: lowercase contains on the
    // name, catalog order. Re-derived whenever the term or the list changes.
    let filtered = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        recipes
            .get()
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    });

    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_search_query.set(value.clone());
        spawn_local(async move {
            let _ = commands::set_preference(SEARCH_PREFERENCE, &value).await;
        });
    };

    let answer_delete = move |confirmed: bool| {
        let Some(id) = pending_delete.get() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match commands::delete_recipe(&id, confirmed).await {
                Ok(list) => {
                    let _ = set_recipes.try_set(list);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    let view_details = Callback::new(move |id: String| {
        navigate(&format!("/recipes/{}", id), Default::default());
    });
    let request_delete = Callback::new(move |id: String| set_pending_delete.set(Some(id)));

    view! {
        <div class="page recipe-list-page">
            <input
                type="text"
                class="input search-bar"
                placeholder="Search recipes..."
                prop:value=move || search_query.get()
                on:input=on_search
            />

            {move || error.get().map(|e| view! { <span class="status-text status-error">{e}</span> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading recipes..."</p> }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No recipes found."</p> }
                >
                    <div class="recipe-list">
                        <For
                            each=move || filtered.get()
                            key=|r| r.id.clone()
                            children=move |recipe| {
                                view! {
                                    <RecipeCard
                                        recipe=recipe
                                        on_view=view_details
                                        on_delete=request_delete
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Recipe"
                    message="Are you sure you want to delete this recipe?"
                    confirm_label="Delete"
                    on_answer=answer_delete
                />
            </Show>
        </div>
    }
}
