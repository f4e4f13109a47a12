#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use site_publisher::config::Config;
use site_publisher::pipeline::RunOptions;

pub const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://www.baowanreview.com/index.html</loc>
    <lastmod>2023-01-01</lastmod>
  </url>
  <url>
    <loc>https://www.baowanreview.com/insights.html</loc>
    <lastmod>2023-01-01</lastmod>
  </url>
</urlset>
"#;

/// A throwaway site root laid out like the real one.
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> Config {
        Config::for_site(self.root())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root().join("data/database.json")
    }

    pub fn feed_path(&self) -> PathBuf {
        self.root().join("data/articles.json")
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.root().join("sitemap.xml")
    }

    pub fn write_database(&self, json: &Value) {
        fs::write(self.database_path(), serde_json::to_string(json).unwrap()).unwrap();
    }

    pub fn write_database_raw(&self, raw: &str) {
        fs::write(self.database_path(), raw).unwrap();
    }

    pub fn write_feed_raw(&self, raw: &str) {
        fs::write(self.feed_path(), raw).unwrap();
    }

    pub fn write_sitemap(&self, text: &str) {
        fs::write(self.sitemap_path(), text).unwrap();
    }

    pub fn read_feed_raw(&self) -> String {
        fs::read_to_string(self.feed_path()).unwrap()
    }

    pub fn read_feed(&self) -> Value {
        serde_json::from_str(&self.read_feed_raw()).unwrap()
    }

    pub fn read_sitemap(&self) -> String {
        fs::read_to_string(self.sitemap_path()).unwrap()
    }
}

pub fn june_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn options_at(now: DateTime<Utc>) -> RunOptions {
    RunOptions {
        now,
        skip_sitemap: false,
    }
}

pub fn feed_ids(feed: &Value) -> Vec<Value> {
    feed.as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].clone())
        .collect()
}
