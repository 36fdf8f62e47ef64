#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the yaml-guard binary.
#[macro_export]
macro_rules! yaml_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("yaml-guard"))
    };
}

/// A temporary directory holding YAML files and an optional config.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates `docker-compose.yml` with the given content.
    pub fn create_compose(&self, content: &str) -> PathBuf {
        self.create_file("docker-compose.yml", content)
    }

    /// Creates a `.yaml-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".yaml-guard.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small Compose file with no issues.
pub const VALID_COMPOSE: &str = r#"version: "3.8"

# Web tier
services:
  web:
    image: nginx:latest
    ports:
      - "8080:80"
    environment:
      - NGINX_HOST=example.com
      - NGINX_PORT=80
"#;

/// A Compose file with one issue of each kind, on lines 3, 4 and 5.
pub const BROKEN_COMPOSE: &str = "services:\n  web:\n\timage: nginx\n    restart:always\n    container_name: \"web\n";
