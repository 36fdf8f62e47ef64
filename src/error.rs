use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YamlGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The file under validation could not be read. Displays as the
    /// user-facing `Error reading file: ...` line.
    #[error("Error reading file: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML error already reads `TOML parse error at line ...`.
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, YamlGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
