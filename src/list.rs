//! `links` command: the link inventory for documentation tooling.

use anyhow::Result;
use sitenav::{config::SiteConfig, nav::{NavTree, extract_links_with}};
use std::io::{Write, stdout};

/// Print every listed link, sorted, one per line, nothing else.
pub fn print_links(tree: &NavTree, config: &SiteConfig) -> Result<()> {
    let links = extract_links_with(tree, &config.links.extra);

    let mut stdout = stdout().lock();
    for link in &links {
        writeln!(stdout, "{link}")?;
    }
    stdout.flush()?;
    Ok(())
}
