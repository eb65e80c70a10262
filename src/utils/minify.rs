//! Minification of rendered navigation fragments.
//!
//! Enabled through `[render] minify` in `sitenav.toml`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify an HTML fragment when enabled in config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_fragment<'a>(html: &'a str, config: &SiteConfig) -> Cow<'a, str> {
    if !config.render.minify {
        return Cow::Borrowed(html);
    }

    let minified = minify_html::minify(html.as_bytes(), &fragment_cfg());
    Cow::Owned(String::from_utf8_lossy(&minified).into_owned())
}

/// Settings for menu markup: closing tags stay so the host can splice the
/// fragment into any container.
fn fragment_cfg() -> minify_html::Cfg {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = false;
    cfg.minify_js = false;
    cfg
}
