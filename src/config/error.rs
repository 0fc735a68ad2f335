//! Errors raised while loading `thinkblog.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// The file is not valid TOML or has unknown/mistyped fields.
    #[error("invalid thinkblog.toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid thinkblog.toml value: {0}")]
    Validation(String),
}
