//! Leptos UI components for the ZARTEX landing page.
//!
//! Each component is a Leptos `#[component]` function. The frames are
//! fixed-copy marketing sections; only [`NewProducts`] and [`AboutTeaser`]
//! take data, everything else renders the same markup every time.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── HomePage
//!     ├── Hero
//!     │   └── SiteNav
//!     ├── CategoryGrid
//!     ├── BedBanner
//!     ├── NewProducts (per-shot product cards)
//!     ├── ReferralBanner
//!     ├── AboutTeaser
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_home`], but can be
//! composed directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use zartex_pages::components::{Hero, Footer};
//!
//! view! {
//!     <Hero />
//!     <Footer />
//! }
//! ```

mod about;
mod bed_banner;
mod button;
mod categories;
mod document;
mod footer;
mod hero;
mod home;
mod icons;
mod new_products;
mod referral;

pub use about::AboutTeaser;
pub use bed_banner::BedBanner;
pub use button::Button;
pub use categories::CategoryGrid;
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use home::HomePage;
pub use icons::*;
pub use new_products::NewProducts;
pub use referral::ReferralBanner;
