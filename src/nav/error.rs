//! Navigation data error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating navigation data.
///
/// All of these are load-time failures: once a [`NavTree`](super::NavTree)
/// exists, resolving and rendering against it cannot fail.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("navigation data parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("navigation data parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported navigation data format `{0}` (expected .toml or .json)")]
    Format(PathBuf),

    #[error("section key must not be empty (section titled `{0}`)")]
    EmptyKey(String),

    #[error("duplicate section key `{0}`")]
    DuplicateSection(String),

    #[error("missing link for `{title}` in section `{section}`")]
    MissingLink { section: String, title: String },

    #[error("duplicate sub-page link `{link}` in section `{section}`")]
    DuplicateSubPage { section: String, link: String },
}
