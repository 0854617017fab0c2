use leptos::prelude::*;

use super::button::Button;

/// "Conocenos" teaser: the page supplies the photo, the frame overlays the
/// tagline and its call-to-action.
#[component]
pub fn AboutTeaser(
    /// Published URL of the teaser photo
    #[prop(into)]
    img: String,
) -> impl IntoView {
    view! {
        <section class="about-teaser">
            <img src=img alt="El atelier de ZARTEX" />
            <div class="about-content">
                <p class="about-title">"Donde la Excelencia se encuentra con la Innovación"</p>
                <Button text="Conocenos" />
            </div>
        </section>
    }
}
