use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar-header">
                <h1 class="nav-bar-title">"Chef's Menu"</h1>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/home" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/recipes" class="nav-link">"Recipe List"</a>
                </li>
                <li class="nav-item">
                    <a href="/recipes/new" class="nav-link">"Add Recipe"</a>
                </li>
            </ul>
        </nav>
    }
}
