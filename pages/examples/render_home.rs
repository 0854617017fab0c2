//! Render the landing page with the stock content.
//!
//! Run with: `cargo run --example render_home`

use zartex_pages::{render_home, types::HomeContent};

fn main() {
    // The stock content the home page ships with
    let content = HomeContent::default();

    // Render to HTML
    let html = render_home(&content);

    // Write to file
    let output_path = "home.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
