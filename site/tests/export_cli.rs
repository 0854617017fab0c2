//! End-to-End CLI tests for the site exporter.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the images bundled with the repository
fn repo_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

/// Get a command pointing to the exporter binary
fn zartex_site() -> Command {
    cargo_bin_cmd!("zartex-site")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        zartex_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("zartex-site"))
            .stdout(predicate::str::contains("--out-dir"))
            .stdout(predicate::str::contains("--assets-dir"));
    }

    #[test]
    fn shows_version() {
        zartex_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Export Runs
// ============================================

mod export_runs {
    use super::*;

    #[test]
    fn publishes_the_whole_tree() {
        let out = TempDir::new().expect("tempdir");

        zartex_site()
            .arg("--out-dir")
            .arg(out.path())
            .arg("--assets-dir")
            .arg(repo_assets())
            .assert()
            .success();

        let index = std::fs::read_to_string(out.path().join("index.html")).expect("read index");
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains("ZARTEX"));
        assert!(index.contains("Nuevos Productos"));

        let manifest = std::fs::read_to_string(out.path().join("site-manifest.json"))
            .expect("read site manifest");
        let bundle: serde_json::Value = serde_json::from_str(&manifest).expect("parse manifest");
        assert_eq!(bundle["schema"]["name"], "zartex-site");
        assert_eq!(bundle["pages"][0], "index.html");
        assert!(bundle["generatedAt"].is_string());

        assert!(out.path().join("assets/images/hero.svg").is_file());
        assert!(out.path().join("assets/images/new_arrival_4.svg").is_file());
    }

    #[test]
    fn fails_when_backing_files_are_missing() {
        let out = TempDir::new().expect("tempdir");
        let empty = TempDir::new().expect("tempdir");

        zartex_site()
            .arg("--out-dir")
            .arg(out.path())
            .arg("--assets-dir")
            .arg(empty.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));

        // Nothing should have been published
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn re_export_overwrites_in_place() {
        let out = TempDir::new().expect("tempdir");

        for _ in 0..2 {
            zartex_site()
                .arg("--out-dir")
                .arg(out.path())
                .arg("--assets-dir")
                .arg(repo_assets())
                .assert()
                .success();
        }

        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("site-manifest.json").is_file());
    }
}
