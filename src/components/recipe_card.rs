use leptos::prelude::*;

use crate::commands::Recipe;

#[component]
pub fn RecipeCard(
    recipe: Recipe,
    #[prop(into)] on_view: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let view_id = recipe.id.clone();
    let delete_id = recipe.id.clone();
    let price = format!("${}", recipe.display_price());

    view! {
        <div class="recipe-card">
            {recipe.image.clone().map(|src| view! { <img class="recipe-card-image" src=src alt="" /> })}
            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{recipe.name.clone()}</h3>
                <p class="recipe-card-description">{recipe.description.clone()}</p>
                <span class="recipe-card-price">{price}</span>
            </div>
            <div class="recipe-card-actions">
                <button class="btn btn-link" on:click=move |_| on_view.run(view_id.clone())>
                    "View Details"
                </button>
                <button class="btn btn-delete" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
