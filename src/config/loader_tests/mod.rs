use std::path::{Path, PathBuf};

use super::*;

mod mock_fs;

pub(super) use mock_fs::{MockFileSystem, UnreadableFileSystem};

pub(super) fn local_config() -> PathBuf {
    Path::new("/project").join(LOCAL_CONFIG_NAME)
}
