//! `[render]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in sitenav.toml - how menus are rendered.
///
/// # Example
/// ```toml
/// [render]
/// doc_mode = true   # leave out entries flagged `skip_in_listing`
/// minify = true
/// width = 375       # viewport assumed when `--width` is not given
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Render in listing (doc) mode.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub doc_mode: bool,

    /// Minify rendered fragments.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Default viewport width in CSS pixels.
    #[serde(default = "defaults::render::width")]
    #[educe(Default = defaults::render::width())]
    pub width: u32,
}
