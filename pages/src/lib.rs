//! # zartex-pages
//!
//! Leptos SSR renderer for the ZARTEX storefront landing pages.
//!
//! This crate provides a type-safe, component-based approach to generating
//! the marketing site as static HTML using [Leptos](https://leptos.dev/)
//! server-side rendering. The page carries no scripts at all; the only
//! interactive behavior (the button hover swap) lives in CSS.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - pure SSR, nothing to hydrate
//! - **Component-Based** - one Leptos component per marketing frame
//! - **Type-Safe** - full Rust type safety from content to HTML
//! - **Self-Contained** - stylesheet inlined, images resolved against one manifest
//!
//! ## Quick Start
//!
//! ```rust
//! use zartex_pages::{render_home, types::HomeContent};
//!
//! // Render the landing page with the stock content
//! let html = render_home(&HomeContent::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("ZARTEX"));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`types`] - Content structures the page renders from
//! - [`components`] - Leptos UI components, one per frame
//! - [`styles`] - CSS constants
//! - [`assets`] - Image manifest and URL helpers
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![doc(html_root_url = "https://docs.rs/zartex-pages/0.1.4")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod components;
pub mod styles;
pub mod types;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::HomeContent;

/// Render the complete landing page to an HTML string.
///
/// This is the main entry point. It takes the [`HomeContent`] the page is
/// built from and produces the whole document, stylesheet included.
///
/// # Arguments
///
/// * `content` - New-arrival shots and the about-frame photo
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use zartex_pages::{render_home, types::HomeContent};
///
/// let html = render_home(&HomeContent::default());
///
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Nuevos Productos"));
/// ```
pub fn render_home(content: &HomeContent) -> String {
    let doc = view! {
        <PageDocument content=content.clone() />
    };

    let html = doc.to_html();

    // Leptos emits the element tree without a DOCTYPE, so prepend it
    format!("<!DOCTYPE html>\n{}", html)
}
