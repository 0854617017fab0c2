use leptos::prelude::*;

use super::button::Button;

/// Footer link column
struct LinkColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

// Placeholder columns until marketing delivers the final link map.
const LINK_COLUMNS: &[LinkColumn] = &[
    LinkColumn {
        title: "Enlaces",
        links: &[("Inicio", "/"), ("Inicio", "/"), ("Inicio", "/")],
    },
    LinkColumn {
        title: "Enlaces",
        links: &[("Inicio", "/"), ("Inicio", "/"), ("Inicio", "/")],
    },
    LinkColumn {
        title: "Enlaces",
        links: &[("Inicio", "/"), ("Inicio", "/"), ("Inicio", "/")],
    },
];

/// Site footer: three static link columns plus the "Become a member" promo.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            {LINK_COLUMNS.iter().map(|column| view! {
                <div class="footer-column">
                    <p class="footer-title">{column.title}</p>
                    <div class="footer-links">
                        {column.links.iter().map(|&(label, to)| view! {
                            <a href=to>{label}</a>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            }).collect::<Vec<_>>()}
            <div class="footer-member">
                <p class="footer-title">"Become a member"</p>
                <p class="footer-description">
                    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quisquam, quos."
                </p>
                <Button text="Become a member" />
            </div>
        </footer>
    }
}
