use leptos::prelude::*;

use super::button::Button;
use super::icons::{Icon, ICON_SEARCH};
use crate::assets;

/// Site nav entry
struct NavLink {
    label: &'static str,
    to: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Recamara", to: "/room" },
    NavLink { label: "Baño", to: "/bathroom" },
    NavLink { label: "Bebe", to: "/baby" },
    NavLink { label: "Cortinas", to: "/curtains" },
];

/// Landing frame: full-bleed seasonal photo, the site nav on top, and the
/// spring invitation with its shop call-to-action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <img
                src=assets::image("hero.svg")
                alt="Recamara ZARTEX en tonos de primavera"
                class="hero-img"
                loading="lazy"
            />
            <SiteNav />
            <div class="hero-invitation">
                <h1>"El despertar mas suave de la primavera"</h1>
                <p>"Lorem ipsum dolor sit amet consectetur adipisicing elit. Quisquam, quos."</p>
                <a href="/shop">
                    <Button text="Comprar Ahora" />
                </a>
            </div>
        </header>
    }
}

#[component]
fn SiteNav() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <ul>
                {NAV_LINKS.iter().map(|link| view! {
                    <li>
                        <a href=link.to>{link.label}</a>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
            <div class="nav-brand">
                <h1>"ZARTEX"</h1>
            </div>
            <a href="/search" class="nav-search" aria-label="Buscar">
                <Icon path=ICON_SEARCH size="20" />
            </a>
        </nav>
    }
}
