mod common;

use common::{SITEMAP, Site, feed_ids};
use serde_json::json;
use std::process::{Command, Output};

const CONFIG_VARS: &[&str] = &[
    "SITE_ROOT",
    "DATABASE_PATH",
    "PUBLIC_ARTICLES_PATH",
    "SITEMAP_PATH",
    "BASE_URL",
    "SITEMAP_PAGE",
    "LOG_FORMAT",
];

fn run_publisher(site: &Site, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_site-publisher"));
    cmd.current_dir(site.root())
        .arg("--root")
        .arg(site.root())
        .args(args)
        .env("RUST_LOG", "warn");
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.output().unwrap()
}

#[test]
fn test_missing_database_exits_with_one() {
    let site = Site::new();

    let output = run_publisher(&site, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!site.feed_path().exists());
}

#[test]
fn test_successful_run_exits_with_zero() {
    let site = Site::new();
    site.write_database(&json!([
        { "id": 1 },
        { "id": 2, "publishDate": "2099-01-01" }
    ]));
    site.write_sitemap(SITEMAP);

    let output = run_publisher(&site, &["--now", "2024-06-01T00:00:00Z"]);

    assert!(output.status.success());
    assert_eq!(feed_ids(&site.read_feed()), vec![json!(1)]);
    assert!(site.read_sitemap().contains("<lastmod>2024-06-01</lastmod>"));
}

#[test]
fn test_invalid_log_format_is_rejected() {
    let site = Site::new();
    site.write_database(&json!([]));

    let output = Command::new(env!("CARGO_BIN_EXE_site-publisher"))
        .current_dir(site.root())
        .arg("--root")
        .arg(site.root())
        .env("LOG_FORMAT", "xml")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!site.feed_path().exists());
}
