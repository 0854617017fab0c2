//! Document shell - wraps the home page in the `<html>`/`<head>`/`<body>`
//! skeleton with the stylesheet inlined, so a single file is the whole
//! deliverable.

use super::HomePage;
use crate::styles::SITE_CSS;
use crate::types::HomeContent;
use leptos::prelude::*;

/// The complete HTML document for the storefront landing page
#[component]
pub fn PageDocument(content: HomeContent) -> impl IntoView {
    view! {
        <html lang="es">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="ZARTEX: sábanas, cobertores, toallas y cortinas para el hogar."
                />
                <title>"ZARTEX · Textiles para el hogar"</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <HomePage content=content />
            </body>
        </html>
    }
}
