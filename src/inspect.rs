//! `resolve` command: dump the resolved highlight state.

use anyhow::Result;
use sitenav::{
    cli::LocationArgs,
    config::SiteConfig,
    nav::{HostPage, Mode, NavTree, Viewport, resolve},
};
use std::io::{Write, stdout};

/// Current page and viewport, as the host page would hand them over.
pub fn host_page(location: &LocationArgs, config: &SiteConfig) -> (HostPage, Viewport) {
    let section = location.section.as_deref().unwrap_or_default();
    let mut host = HostPage::from_attributes(&location.path, section, None);
    host.mode = Mode::from_doc_mode(config.render.doc_mode);
    (host, Viewport::new(config.render.width))
}

/// Print the resolved state as pretty JSON.
pub fn print_state(tree: &NavTree, config: &SiteConfig, location: &LocationArgs) -> Result<()> {
    let (host, viewport) = host_page(location, config);
    let state = resolve(tree, &host.location, viewport, host.mode);

    let mut stdout = stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &state)?;
    writeln!(stdout)?;
    Ok(())
}
