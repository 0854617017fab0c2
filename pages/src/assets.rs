//! Asset path aliases shared by the page renderer and the site exporter.
//!
//! The markup never spells out image locations: every `src` goes through
//! [`image`], so the published URL prefix lives in exactly one place. The
//! exporter resolves the same prefix against its `--assets-dir` when it
//! copies files, which is what keeps rendered URLs and the on-disk tree in
//! agreement.
//!
//! [`MANIFEST`] lists every image the fixed markup may reference. An export
//! fails when a rendered URL is missing from the manifest or a manifest
//! entry is missing from disk, so a renamed or forgotten file is caught at
//! build time rather than as a broken image in production.

/// Published URL prefix for image assets, relative to the site root.
pub const IMAGES_ROOT: &str = "assets/images";

/// Every image file the landing markup may reference. Entries are file
/// names under [`IMAGES_ROOT`]; [`image`] turns them into published URLs.
pub const MANIFEST: &[&str] = &[
    "atelier.svg",
    "baby.svg",
    "bathroom.svg",
    "bed.svg",
    "curtains.svg",
    "happy_bed.svg",
    "hero.svg",
    "new_arrival_1.svg",
    "new_arrival_2.svg",
    "new_arrival_3.svg",
    "new_arrival_4.svg",
    "room.svg",
];

/// Published URL for an image file under [`IMAGES_ROOT`].
pub fn image(file: &str) -> String {
    format!("{IMAGES_ROOT}/{file}")
}

/// Extract every `src="assets/…"` URL from rendered HTML, deduplicated and
/// sorted.
///
/// This only understands the HTML this crate renders itself (double-quoted
/// attributes), which is all the exporter needs for its resolution check.
pub fn asset_urls(html: &str) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find("src=\"") {
        rest = &rest[pos + 5..];
        if let Some(end) = rest.find('"') {
            let url = &rest[..end];
            if url.starts_with("assets/") {
                urls.push(url.to_string());
            }
            rest = &rest[end..];
        } else {
            break;
        }
    }
    urls.sort();
    urls.dedup();
    urls
}
