//! `[nav]` section configuration.
//!
//! Points at the navigation data file.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[nav]` section in sitenav.toml.
///
/// # Example
/// ```toml
/// [nav]
/// path = "webapp/nav.json"   # relative to the project root, `~` expanded
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavDataConfig {
    /// Navigation data file, `.toml` or `.json`.
    #[serde(default = "defaults::nav::path")]
    #[educe(Default = defaults::nav::path())]
    pub path: PathBuf,
}
