use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::add_recipe::AddRecipePage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::recipe_details::RecipeDetailsPage;
use crate::pages::recipe_list::RecipeListPage;
use crate::state::{PendingRecipe, SessionContext};

#[component]
pub fn App() -> impl IntoView {
    let (logged_in, set_logged_in) = signal(false);
    provide_context(SessionContext {
        logged_in,
        set_logged_in,
    });
    provide_context(PendingRecipe(RwSignal::new(None)));

    view! {
        <Router>
            <div class="app-layout">
                <Show when=move || logged_in.get()>
                    <NavBar />
                </Show>
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LoginPage />
                        <Route path=path!("/home") view=|| view! { <RequireLogin><HomePage /></RequireLogin> } />
                        <Route path=path!("/recipes") view=|| view! { <RequireLogin><RecipeListPage /></RequireLogin> } />
                        <Route path=path!("/recipes/new") view=|| view! { <RequireLogin><AddRecipePage /></RequireLogin> } />
                        <Route path=path!("/recipes/:id") view=|| view! { <RequireLogin><RecipeDetailsPage /></RequireLogin> } />
                        <Route path=path!("/details") view=|| view! { <RequireLogin><RecipeDetailsPage /></RequireLogin> } />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Renders its children only after login; otherwise sends the user back
/// to the login screen.
#[component]
fn RequireLogin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    view! {
        <Show
            when=move || session.logged_in.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
