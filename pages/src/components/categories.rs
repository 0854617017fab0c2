use leptos::prelude::*;

use crate::assets;

/// Category card content
struct Category {
    label: &'static str,
    img: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { label: "Recamara", img: "room.svg" },
    Category { label: "Baño", img: "bathroom.svg" },
    Category { label: "Bebe", img: "baby.svg" },
    Category { label: "Cortinas", img: "curtains.svg" },
];

/// "COMPRAR POR CATEGORIAS" frame: four figure cards, one per department.
/// The cards themselves are not links; navigation lives in the hero nav.
#[component]
pub fn CategoryGrid() -> impl IntoView {
    view! {
        <section class="categories">
            <p class="categories-title">"COMPRAR POR CATEGORIAS"</p>
            <div class="category-cards">
                {CATEGORIES.iter().map(|category| view! {
                    <div class="category-card">
                        <figure>
                            <img
                                src=assets::image(category.img)
                                alt=category.label
                                loading="lazy"
                            />
                        </figure>
                        <h2>{category.label}</h2>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
