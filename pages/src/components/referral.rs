use leptos::prelude::*;

use super::button::Button;
use crate::assets;

/// "Familia Regina" referral promo: program copy on the left, photo on the
/// right.
#[component]
pub fn ReferralBanner() -> impl IntoView {
    view! {
        <section class="referral">
            <div class="referral-copy">
                <p class="referral-title">"Compárte lujo, recibe recompensas."</p>
                <p class="referral-description">
                    "¿Listo para ganar el 50 % de cada venta?"
                    <br />
                    "Únete a Familia Regina y desbloquea bonos exclusivos, puntos por compras y envíos gratis."
                    <br />
                    "Comparte tu enlace único y recibe el 1 % de las ventas de tus referidos."
                    <br />
                    "¡Afíliate hoy y empieza a multiplicar tus ingresos!"
                </p>
                <Button text="¡Afíliate hoy!" />
            </div>
            <div class="referral-photo">
                <img src=assets::image("happy_bed.svg") alt="Cama arreglada con cojines" />
            </div>
        </section>
    }
}
