use leptos::prelude::*;

struct Dish {
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

const MENU: [Dish; 3] = [
    Dish {
        name: "Grilled Salmon with Herbs",
        description: "A delicious grilled salmon served with fresh herbs and lemon slices.",
        image: "assets/images/fish.png",
    },
    Dish {
        name: "Chicken Alfredo",
        description: "Creamy pasta with grilled chicken, Parmesan cheese, and garlic.",
        image: "assets/images/chicken.png",
    },
    Dish {
        name: "Beef Stroganoff",
        description: "Tender strips of beef in a creamy mushroom sauce, served over egg noodles.",
        image: "assets/images/beef.png",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Chef's Menu"</h2>

            <div class="dish-list">
                {MENU.iter().map(|dish| view! {
                    <div class="dish-section">
                        <img class="dish-image" src=dish.image alt=dish.name />
                        <h3 class="dish-name">{dish.name}</h3>
                        <p class="dish-description">{dish.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="button-column">
                <a href="/recipes" class="btn btn-primary">"Recipe List"</a>
                <a href="/recipes/new" class="btn btn-primary">"Add New Recipe"</a>
                <a href="/details" class="btn btn-primary">"Recipe Details"</a>
            </div>
        </div>
    }
}
