//! Export pipeline: render the page, gate it against the image manifest,
//! publish the output tree.
//!
//! The gate runs before anything is written. If the markup references an
//! image the manifest doesn't know, or a manifest image has no backing
//! file, the export fails and the previous output stays untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;
use walkdir::WalkDir;

use zartex_pages::assets::{self, MANIFEST};
use zartex_pages::render_home;
use zartex_pages::types::HomeContent;

const SCHEMA_NAME: &str = "zartex-site";
const SCHEMA_VERSION: &str = "1.0.0";

/// Ways the rendered page and the bundled images can disagree.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The markup references an image the manifest doesn't list.
    #[error("page references {url} which is not in the image manifest")]
    UnknownAsset {
        /// URL as it appears in the markup
        url: String,
    },

    /// A manifest image has no backing file under the assets directory.
    #[error("manifest lists {file} but {path} does not exist")]
    MissingAsset {
        /// File name as listed in the manifest
        file: String,
        /// Path that was checked
        path: PathBuf,
    },
}

/// What one export run produced.
#[derive(Debug)]
pub struct ExportSummary {
    /// Artifacts written under the output directory, `./`-relative
    pub created: Vec<String>,
    /// Number of asset files copied
    pub assets_published: usize,
    /// Size of the rendered page in bytes
    pub html_bytes: usize,
}

/// Render the landing page and publish it under `out_dir`.
///
/// Re-exporting overwrites the previous output in place.
pub fn export_site(
    content: &HomeContent,
    assets_dir: &Path,
    out_dir: &Path,
) -> Result<ExportSummary> {
    let html = render_home(content);
    info!("Rendered index.html ({} bytes)", html.len());

    let urls = assets::asset_urls(&html);
    verify_assets(&urls, assets_dir)?;
    info!("All {} referenced images resolve", urls.len());

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let copied = copy_asset_tree(assets_dir, &out_dir.join("assets"))?;
    info!("Published {} asset files", copied.len());

    let mut created = Vec::new();

    let index_path = out_dir.join("index.html");
    fs::write(&index_path, &html).with_context(|| format!("writing {}", index_path.display()))?;
    created.push(rel_label(&index_path, out_dir));

    let assets_published = copied.len();
    let bundle = json!({
        "schema": { "name": SCHEMA_NAME, "version": SCHEMA_VERSION },
        "generatedAt": time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string()),
        "pages": ["index.html"],
        "assets": copied,
        "content": content,
    });
    let manifest_path = out_dir.join("site-manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&bundle)?)
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    created.push(rel_label(&manifest_path, out_dir));

    Ok(ExportSummary {
        created,
        assets_published,
        html_bytes: html.len(),
    })
}

/// Check both directions: every URL in the markup is a manifest image, and
/// every manifest image has a file under `assets_dir/images`.
fn verify_assets(urls: &[String], assets_dir: &Path) -> Result<(), ExportError> {
    for url in urls {
        let file = url
            .strip_prefix(assets::IMAGES_ROOT)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| ExportError::UnknownAsset { url: url.clone() })?;
        if !MANIFEST.contains(&file) {
            return Err(ExportError::UnknownAsset { url: url.clone() });
        }
    }

    for file in MANIFEST {
        let path = assets_dir.join("images").join(file);
        if !path.is_file() {
            return Err(ExportError::MissingAsset {
                file: (*file).to_string(),
                path,
            });
        }
    }

    Ok(())
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_asset_tree(src: &Path, dst: &Path) -> Result<Vec<String>> {
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(src)?;
        let target = dst.join(rel);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("copying {}", entry.path().display()))?;
        copied.push(format!("assets/{}", rel.display()));
    }
    Ok(copied)
}

fn rel_label(path: &Path, root: &Path) -> String {
    format!("./{}", path.strip_prefix(root).unwrap_or(path).display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Write a stand-in SVG for every manifest image under `root/images`.
    fn seed_assets(root: &Path) {
        let images = root.join("images");
        fs::create_dir_all(&images).expect("create images dir");
        for file in MANIFEST {
            fs::write(
                images.join(file),
                "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
            )
            .expect("write stand-in image");
        }
    }

    #[test]
    fn rejects_urls_outside_the_manifest() {
        let assets = TempDir::new().expect("tempdir");
        seed_assets(assets.path());

        let urls = vec!["assets/images/nope.svg".to_string()];
        match verify_assets(&urls, assets.path()) {
            Err(ExportError::UnknownAsset { url }) => {
                assert_eq!(url, "assets/images/nope.svg");
            }
            other => panic!("expected UnknownAsset, got {other:?}"),
        }
    }

    #[test]
    fn rejects_urls_outside_the_images_root() {
        let assets = TempDir::new().expect("tempdir");
        seed_assets(assets.path());

        let urls = vec!["assets/fonts/serif.woff2".to_string()];
        assert!(matches!(
            verify_assets(&urls, assets.path()),
            Err(ExportError::UnknownAsset { .. })
        ));
    }

    #[test]
    fn reports_the_first_missing_backing_file() {
        let assets = TempDir::new().expect("tempdir");

        match verify_assets(&[], assets.path()) {
            Err(ExportError::MissingAsset { file, .. }) => {
                assert_eq!(file, MANIFEST[0]);
            }
            other => panic!("expected MissingAsset, got {other:?}"),
        }
    }

    #[test]
    fn exports_the_whole_tree() {
        let assets = TempDir::new().expect("tempdir");
        seed_assets(assets.path());
        let out = TempDir::new().expect("tempdir");

        let summary = export_site(&HomeContent::default(), assets.path(), out.path())
            .expect("export succeeds");

        assert_eq!(summary.created.len(), 2);
        assert_eq!(summary.assets_published, MANIFEST.len());

        let index = fs::read_to_string(out.path().join("index.html")).expect("read index");
        assert!(index.starts_with("<!DOCTYPE html>"));

        let manifest =
            fs::read_to_string(out.path().join("site-manifest.json")).expect("read manifest");
        let bundle: serde_json::Value = serde_json::from_str(&manifest).expect("parse manifest");
        assert_eq!(bundle["schema"]["name"], SCHEMA_NAME);
        assert_eq!(bundle["pages"][0], "index.html");
        assert_eq!(
            bundle["assets"].as_array().map(|a| a.len()),
            Some(MANIFEST.len())
        );

        for file in MANIFEST {
            assert!(
                out.path().join("assets/images").join(file).is_file(),
                "missing published copy of {file}"
            );
        }
    }

    #[test]
    fn re_export_overwrites_in_place() {
        let assets = TempDir::new().expect("tempdir");
        seed_assets(assets.path());
        let out = TempDir::new().expect("tempdir");

        export_site(&HomeContent::default(), assets.path(), out.path()).expect("first export");
        let summary = export_site(&HomeContent::default(), assets.path(), out.path())
            .expect("second export");

        assert_eq!(summary.created.len(), 2);
        assert!(out.path().join("index.html").is_file());
    }
}
