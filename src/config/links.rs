//! `[links]` section configuration.

use serde::{Deserialize, Serialize};

/// `[links]` section in sitenav.toml - extra entries for the link inventory.
///
/// # Example
/// ```toml
/// [links]
/// extra = ["/privacy", "/terms"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Absolute paths listed in addition to the tree and `/thankyou`.
    #[serde(default)]
    pub extra: Vec<String>,
}
