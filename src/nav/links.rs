//! Link inventory for documentation tooling.
//!
//! Collects every reachable page link of the tree into a sorted,
//! de-duplicated list.

use super::types::{Mode, NavTree};
use std::collections::BTreeSet;

/// Landing page shown after a purchase. Reachable, but never in the menu.
pub const THANK_YOU_PATH: &str = "/thankyou";

/// All listed links of `tree`, plus [`THANK_YOU_PATH`], sorted ascending.
///
/// Sections flagged `skip_in_listing` contribute nothing, including their
/// sub-pages; flagged sub-pages are left out individually.
pub fn extract_links(tree: &NavTree) -> Vec<String> {
    extract_links_with(tree, &[])
}

/// Same as [`extract_links`], merging `extra` paths into the result.
pub fn extract_links_with(tree: &NavTree, extra: &[String]) -> Vec<String> {
    let mut links: BTreeSet<&str> = BTreeSet::new();
    links.insert(THANK_YOU_PATH);
    links.extend(extra.iter().map(String::as_str));

    for section in tree.visible_sections(Mode::Listing) {
        links.insert(section.link.as_str());
        links.extend(
            section
                .visible_sub_pages(Mode::Listing)
                .map(|page| page.link.as_str()),
        );
    }

    links.into_iter().map(str::to_owned).collect()
}
