use leptos::prelude::*;

use crate::types::ProductShot;

/// "Nuevos Productos" frame. The only grid on the page that renders from
/// props: one card per shot, in the order the page supplies them. An empty
/// list still renders the heading over an empty grid.
#[component]
pub fn NewProducts(
    /// Product shots in display order
    shots: Vec<ProductShot>,
) -> impl IntoView {
    view! {
        <section class="new-products">
            <p class="new-products-title">"Nuevos Productos"</p>
            <p class="new-products-description">
                "Diseñados para quienes buscan experiencias que acarician tus sentidos."
            </p>
            <div class="product-grid">
                {shots.into_iter().map(|shot| view! {
                    <figure class="product-card">
                        <img src=shot.src alt=shot.alt />
                    </figure>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
