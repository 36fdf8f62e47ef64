use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::FileSystem;

pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: Some(PathBuf::from("/project")),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    pub fn without_current_dir(mut self) -> Self {
        self.current_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        self.current_dir
            .clone()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "no current directory"))
    }
}

/// Reports every path as present but fails to read any of them.
pub struct UnreadableFileSystem;

impl FileSystem for UnreadableFileSystem {
    fn read_to_string(&self, _path: &Path) -> std::io::Result<String> {
        Err(Error::new(ErrorKind::PermissionDenied, "permission denied"))
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(PathBuf::from("/project"))
    }
}
