use leptos::prelude::*;

use super::button::Button;
use crate::assets;

/// Full-width bed promo with overlay copy and the covers call-to-action.
#[component]
pub fn BedBanner() -> impl IntoView {
    view! {
        <section class="bed-banner">
            <img
                src=assets::image("bed.svg")
                alt="Cama tendida con cobertor de lino"
                loading="lazy"
            />
            <div class="bed-banner-content">
                <p class="bed-banner-kicker">"Descubre el lujo que tu hogar merece"</p>
                <p class="bed-banner-title">"Calidad que transforma tu lugar"</p>
                <Button text="Comprar Cobertores" />
            </div>
        </section>
    }
}
