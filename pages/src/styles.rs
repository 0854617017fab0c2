//! CSS for the landing pages.
//!
//! The whole sheet ships as a single constant embedded in the document
//! `<style>` tag, so the exported `index.html` is self-contained.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use zartex_pages::styles::SITE_CSS;
//!
//! let my_css = ".promo-ribbon { background: #7a2e2e; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```
//!
//! No rule references an asset URL: every image the page shows comes from an
//! `<img>` element, which keeps the exporter's manifest check complete.

/// Complete stylesheet for the landing pages - warm linen palette.
///
/// Covers:
/// - Brand palette and typography variables
/// - The three-layer button hover animation
/// - Per-frame layout (hero, categories, banners, product grid, footer)
/// - Responsive breakpoints for tablet and phone widths
pub const SITE_CSS: &str = r#"
:root {
    --bg-cream: #faf6f0;
    --bg-sand: #efe7db;
    --ink: #2b2723;
    --ink-soft: #5c544b;
    --accent: #9a6b4f;
    --accent-dark: #7c523a;
    --paper: #ffffff;
    --footer-ink: #241f1b;
    --font-display: 'Cormorant Garamond', Georgia, 'Times New Roman', serif;
    --font-body: 'Avenir Next', 'Segoe UI', Helvetica, Arial, sans-serif;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-body);
    background: var(--bg-cream);
    color: var(--ink);
    line-height: 1.6;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

ul {
    margin: 0;
    padding: 0;
    list-style: none;
}

h1, h2, p {
    margin: 0;
}

::selection {
    background: rgba(154, 107, 79, 0.25);
}

/* ==========================================================================
   Button atom - three stacked labels, the visible pair swaps on hover
   ========================================================================== */

.btn {
    position: relative;
    overflow: hidden;
    display: inline-block;
    padding: 14px 38px;
    border: 1px solid var(--ink);
    background: transparent;
    color: var(--ink);
    font-family: var(--font-body);
    font-size: 14px;
    letter-spacing: 0.14em;
    text-transform: uppercase;
    cursor: pointer;
    transition: background 0.35s ease, color 0.35s ease, border-color 0.35s ease;
}

.btn-placeholder {
    visibility: hidden;
}

.btn-text-top,
.btn-text-bottom {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: transform 0.35s cubic-bezier(0.45, 0, 0.2, 1);
}

.btn-text-bottom {
    transform: translateY(105%);
}

.btn:hover {
    background: var(--ink);
    color: var(--bg-cream);
    border-color: var(--ink);
}

.btn:hover .btn-text-top {
    transform: translateY(-105%);
}

.btn:hover .btn-text-bottom {
    transform: translateY(0);
}

/* ==========================================================================
   Hero - full-bleed photo, overlay nav, seasonal invitation
   ========================================================================== */

.hero {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
}

.hero-img {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.site-nav {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 28px 48px;
}

.site-nav ul {
    display: flex;
    gap: 32px;
}

.site-nav li a {
    font-size: 14px;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    border-bottom: 1px solid transparent;
    padding-bottom: 3px;
    transition: border-color 0.25s ease;
}

.site-nav li a:hover {
    border-color: var(--ink);
}

.nav-brand {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
}

.nav-brand h1 {
    font-family: var(--font-display);
    font-size: 30px;
    font-weight: 600;
    letter-spacing: 0.38em;
    text-indent: 0.38em;
}

.nav-search {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    transition: background 0.25s ease;
}

.nav-search:hover {
    background: rgba(43, 39, 35, 0.08);
}

.hero-invitation {
    position: relative;
    max-width: 560px;
    margin: 18vh 0 0 8vw;
    padding: 8px;
}

.hero-invitation h1 {
    font-family: var(--font-display);
    font-size: clamp(36px, 5vw, 58px);
    font-weight: 500;
    line-height: 1.15;
}

.hero-invitation p {
    margin: 18px 0 30px;
    color: var(--ink-soft);
    max-width: 420px;
}

/* ==========================================================================
   Category grid
   ========================================================================== */

.categories {
    padding: 96px 48px 72px;
    max-width: var(--container-max);
    margin: 0 auto;
}

.categories-title {
    text-align: center;
    font-size: 15px;
    letter-spacing: 0.32em;
    text-indent: 0.32em;
    color: var(--ink-soft);
    margin-bottom: 56px;
}

.category-cards {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 28px;
}

.category-card figure {
    margin: 0 0 18px;
    aspect-ratio: 3 / 4;
    overflow: hidden;
    background: var(--bg-sand);
}

.category-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.category-card:hover img {
    transform: scale(1.04);
}

.category-card h2 {
    text-align: center;
    font-family: var(--font-display);
    font-size: 22px;
    font-weight: 500;
}

/* ==========================================================================
   Bed banner
   ========================================================================== */

.bed-banner {
    position: relative;
    overflow: hidden;
}

.bed-banner img {
    width: 100%;
    max-height: 640px;
    object-fit: cover;
}

.bed-banner-content {
    position: absolute;
    top: 50%;
    left: 8vw;
    transform: translateY(-50%);
    max-width: 460px;
}

.bed-banner-kicker {
    font-size: 14px;
    letter-spacing: 0.18em;
    text-transform: uppercase;
    color: var(--ink-soft);
}

.bed-banner-title {
    font-family: var(--font-display);
    font-size: clamp(30px, 4vw, 46px);
    line-height: 1.2;
    margin: 14px 0 30px;
}

/* ==========================================================================
   New products
   ========================================================================== */

.new-products {
    padding: 96px 48px;
    max-width: var(--container-max);
    margin: 0 auto;
    text-align: center;
}

.new-products-title {
    font-family: var(--font-display);
    font-size: 36px;
    font-weight: 500;
}

.new-products-description {
    color: var(--ink-soft);
    margin: 12px auto 52px;
    max-width: 520px;
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 28px;
}

.product-card {
    margin: 0;
    aspect-ratio: 4 / 5;
    overflow: hidden;
    background: var(--bg-sand);
}

.product-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.product-card:hover img {
    transform: scale(1.04);
}

/* ==========================================================================
   Referral banner
   ========================================================================== */

.referral {
    display: flex;
    align-items: stretch;
    background: var(--bg-sand);
}

.referral-copy {
    flex: 1 1 50%;
    padding: 80px 8vw;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: flex-start;
}

.referral-title {
    font-family: var(--font-display);
    font-size: clamp(28px, 3.4vw, 42px);
    line-height: 1.2;
}

.referral-description {
    margin: 22px 0 34px;
    color: var(--ink-soft);
    max-width: 480px;
}

.referral-photo {
    flex: 1 1 50%;
}

.referral-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

/* ==========================================================================
   About teaser
   ========================================================================== */

.about-teaser {
    position: relative;
    overflow: hidden;
}

.about-teaser img {
    width: 100%;
    max-height: 560px;
    object-fit: cover;
}

.about-content {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    background: rgba(36, 31, 27, 0.35);
    color: var(--bg-cream);
    padding: 0 24px;
}

.about-content .about-title {
    font-family: var(--font-display);
    font-size: clamp(28px, 3.6vw, 44px);
    max-width: 640px;
    line-height: 1.25;
    margin-bottom: 34px;
}

.about-content .btn {
    border-color: var(--bg-cream);
    color: var(--bg-cream);
}

.about-content .btn:hover {
    background: var(--bg-cream);
    color: var(--ink);
}

/* ==========================================================================
   Footer
   ========================================================================== */

.footer {
    display: grid;
    grid-template-columns: repeat(3, 1fr) 1.4fr;
    gap: 40px;
    padding: 72px 48px;
    background: var(--footer-ink);
    color: var(--bg-cream);
}

.footer-title {
    font-size: 14px;
    letter-spacing: 0.18em;
    text-transform: uppercase;
    margin-bottom: 22px;
}

.footer-links a {
    display: block;
    margin-bottom: 12px;
    color: rgba(250, 246, 240, 0.72);
    transition: color 0.25s ease;
}

.footer-links a:hover {
    color: var(--bg-cream);
}

.footer-member .footer-description {
    color: rgba(250, 246, 240, 0.72);
    margin-bottom: 26px;
    max-width: 360px;
}

.footer-member .btn {
    border-color: var(--bg-cream);
    color: var(--bg-cream);
}

.footer-member .btn:hover {
    background: var(--bg-cream);
    color: var(--footer-ink);
}

/* ==========================================================================
   Breakpoints
   ========================================================================== */

@media (max-width: 960px) {
    .site-nav {
        padding: 22px 24px;
    }

    .site-nav ul {
        gap: 18px;
    }

    .category-cards,
    .product-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .referral {
        flex-direction: column;
    }

    .footer {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 600px) {
    .site-nav {
        flex-wrap: wrap;
        gap: 14px;
    }

    .nav-brand {
        position: static;
        transform: none;
        order: -1;
        width: 100%;
        text-align: center;
    }

    .hero-invitation {
        margin: 10vh 24px 0;
    }

    .categories,
    .new-products {
        padding-left: 24px;
        padding-right: 24px;
    }

    .category-cards,
    .product-grid {
        grid-template-columns: 1fr;
    }

    .footer {
        grid-template-columns: 1fr;
        padding: 56px 24px;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_no_asset_urls() {
        assert!(!SITE_CSS.contains("url("), "keep asset refs in markup only");
    }

    #[test]
    fn button_layers_are_styled() {
        for class in [".btn", ".btn-placeholder", ".btn-text-top", ".btn-text-bottom"] {
            assert!(SITE_CSS.contains(class), "missing rule for {class}");
        }
    }
}
