//! `check` command: sanity report on the navigation data.

use anyhow::Result;
use sitenav::{
    config::SiteConfig,
    log,
    nav::{NavTree, extract_links_with},
};

/// Report what was loaded and flag sections breaking the root-first
/// convention.
pub fn check_site(tree: &NavTree, config: &SiteConfig) -> Result<()> {
    let sub_pages: usize = tree
        .sections()
        .iter()
        .filter_map(|section| section.sub_pages.as_ref())
        .map(Vec::len)
        .sum();
    let links = extract_links_with(tree, &config.links.extra);

    log!("check"; "{}: {}", config.base.title, config.nav.path.display());
    log!("check"; "{} sections, {} sub-pages, {} listed links", tree.len(), sub_pages, links.len());

    for section in tree.sections() {
        let first = section.sub_pages.as_ref().and_then(|pages| pages.first());
        if let Some(first) = first
            && first.link != section.link
        {
            log!(
                "warn";
                "section `{}`: first sub-page `{}` is not the section link `{}`",
                section.key,
                first.link,
                section.link
            );
        }
    }

    Ok(())
}
