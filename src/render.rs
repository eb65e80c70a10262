//! `render` command: navigation menu markup.

use crate::inspect::host_page;
use anyhow::{Context, Result, bail};
use sitenav::{
    cli::LocationArgs,
    config::SiteConfig,
    log,
    nav::{NavRenderer, NavTree, resolve},
    utils::minify::minify_fragment,
};
use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

/// Render the main (or secondary) navigation to stdout or `output`.
pub fn render_menu(
    tree: &NavTree,
    config: &SiteConfig,
    location: &LocationArgs,
    secondary: bool,
    output: Option<&Path>,
) -> Result<()> {
    let (host, viewport) = host_page(location, config);
    let state = resolve(tree, &host.location, viewport, host.mode);
    let renderer = NavRenderer::new(tree, &state, host.mode);

    let html = if secondary {
        let Some(key) = host.location.section.as_deref() else {
            bail!("`--secondary` requires `--section`");
        };
        match renderer.secondary_nav(key) {
            Some(html) => html,
            None => {
                log!("render"; "no secondary navigation for `{key}`");
                String::new()
            }
        }
    } else {
        renderer.main_nav()
    };
    let html = minify_fragment(&html, config);

    match output {
        Some(path) => {
            fs::write(path, html.as_bytes())
                .with_context(|| format!("Failed to write menu to {}", path.display()))?;
            log!("render"; "{}", path.display());
        }
        None => {
            let mut stdout = stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
