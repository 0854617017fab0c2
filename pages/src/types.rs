//! Content types for the landing pages.
//!
//! These are render-time property bags: the page hands them down to the
//! frames once per render and nothing mutates or persists them. They're
//! designed to be:
//!
//! - **Serializable** - the site exporter echoes the rendered content into
//!   its build manifest via serde
//! - **Clone-friendly** - components take owned values, no borrowing issues
//! - **Default-able** - `HomeContent::default()` carries the canonical
//!   literals the home page ships with
//!
//! # Example
//!
//! ```rust
//! use zartex_pages::types::{HomeContent, ProductShot};
//!
//! let content = HomeContent {
//!     new_arrivals: vec![ProductShot {
//!         src: "assets/images/new_arrival_1.svg".into(),
//!         alt: "Juego de sábanas de lino".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(content.new_arrivals.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::assets;

/// One product image plus its alt text, as shown in the "Nuevos Productos"
/// grid. The page supplies these as props; the frame renders one card per
/// shot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductShot {
    /// Published image URL, relative to the site root (see [`crate::assets`])
    pub src: String,
    /// Alt text for the `<img>` element
    pub alt: String,
}

impl ProductShot {
    /// Shot for an image file under the images root.
    pub fn new(file: &str, alt: &str) -> Self {
        Self {
            src: assets::image(file),
            alt: alt.to_string(),
        }
    }
}

/// Everything the home page passes down to its frames.
///
/// Only two frames take props at all: the new-products grid and the about
/// teaser. The rest of the page is fixed markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Shots for the "Nuevos Productos" grid, in display order
    pub new_arrivals: Vec<ProductShot>,
    /// Image URL for the "Conocenos" about teaser
    pub about_img: String,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            new_arrivals: vec![
                ProductShot::new("new_arrival_1.svg", "Juego de sábanas de lino"),
                ProductShot::new("new_arrival_2.svg", "Cobertor matrimonial"),
                ProductShot::new("new_arrival_3.svg", "Toallas de algodón egipcio"),
                ProductShot::new("new_arrival_4.svg", "Cortinas de gasa"),
            ],
            about_img: assets::image("atelier.svg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn default_content_ships_four_arrivals() {
        let content = HomeContent::default();
        assert_eq!(content.new_arrivals.len(), 4);
        assert!(content.about_img.starts_with(assets::IMAGES_ROOT));
    }

    #[test]
    fn shot_paths_go_through_the_images_root() {
        let shot = ProductShot::new("bed.svg", "Cama tendida");
        assert_eq!(shot.src, format!("{}/bed.svg", assets::IMAGES_ROOT));
        assert_eq!(shot.alt, "Cama tendida");
    }

    #[test]
    fn content_round_trips_through_serde() {
        let content = HomeContent::default();
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["about_img"], json!("assets/images/atelier.svg"));

        let back: HomeContent = serde_json::from_value(value).unwrap();
        assert_eq!(back, content);
    }
}
