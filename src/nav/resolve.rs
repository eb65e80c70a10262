//! Active-link resolution.
//!
//! Decides which section and sub-page are marked "active" for the current
//! location, and whether the active section's submenu starts expanded.
//!
//! # Matching Rules
//!
//! | Target            | Rule                                                   |
//! |-------------------|--------------------------------------------------------|
//! | section           | key equals the caller-supplied section (never prefix)  |
//! | sub-page, index 0 | `path == link` (the section root must not swallow all) |
//! | sub-page, index n | `path.starts_with(link)`                               |
//!
//! The first matching sub-page wins. Indexes count the sub-pages visible in
//! the current [`Mode`].

use super::types::{Mode, NavEntry, NavTree};
use serde::Serialize;

/// Widest viewport (in device-independent pixels) still treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

// ============================================================================
// Inputs
// ============================================================================

/// Where the visitor currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Absolute path of the current page, e.g. `/about/online`.
    pub path: String,
    /// Key of the section the host page identifies as current.
    pub section: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>, section: Option<impl Into<String>>) -> Self {
        Self {
            path: path.into(),
            section: section.map(Into::into),
        }
    }
}

/// Browser viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    #[inline]
    pub const fn is_mobile(self) -> bool {
        self.width <= MOBILE_BREAKPOINT
    }
}

// ============================================================================
// Resolved State
// ============================================================================

/// Highlight state derived from a [`Location`]. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedState {
    pub active_section_key: Option<String>,
    pub active_sub_link: Option<String>,
    pub mobile_expanded: bool,
}

impl ResolvedState {
    pub fn is_section_active(&self, key: &str) -> bool {
        self.active_section_key.as_deref() == Some(key)
    }

    pub fn is_sub_active(&self, link: &str) -> bool {
        self.active_sub_link.as_deref() == Some(link)
    }

    /// Whether the submenu of section `key` starts expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.mobile_expanded && self.is_section_active(key)
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolve the highlight state for `location`.
///
/// An unknown or missing section yields the all-inactive state.
pub fn resolve(
    tree: &NavTree,
    location: &Location,
    viewport: Viewport,
    mode: Mode,
) -> ResolvedState {
    let Some(section) = location.section.as_deref().and_then(|key| tree.get(key)) else {
        return ResolvedState::default();
    };

    let active_sub_link = section
        .visible_sub_pages(mode)
        .enumerate()
        .find(|(index, page)| sub_page_matches(*index, page, &location.path))
        .map(|(_, page)| page.link.clone());

    ResolvedState {
        active_section_key: Some(section.key.clone()),
        active_sub_link,
        mobile_expanded: viewport.is_mobile(),
    }
}

/// Whether the sub-page at `index` of the visible list matches `path`.
///
/// The first entry is normally the section root (`/about`) and must match
/// exactly, so that `/about/online` is left to its own entry.
#[inline]
pub fn sub_page_matches(index: usize, page: &NavEntry, path: &str) -> bool {
    if index == 0 {
        path == page.link
    } else {
        path.starts_with(page.link.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::types::fixtures::{entry, sample_tree, section};

    const DESKTOP: Viewport = Viewport::new(1280);
    const PHONE: Viewport = Viewport::new(375);

    fn about_tree() -> NavTree {
        NavTree::new(vec![section(
            "about",
            "/about",
            Some(vec![
                entry("About", "/about"),
                entry("Practice", "/about/practice"),
                entry("Online", "/about/online"),
            ]),
        )])
        .unwrap()
    }

    fn at(path: &str, section: &str) -> Location {
        Location::new(path, Some(section))
    }

    fn active_sub(tree: &NavTree, path: &str, section: &str) -> Option<String> {
        resolve(tree, &at(path, section), DESKTOP, Mode::Interactive).active_sub_link
    }

    #[test]
    fn test_about_examples() {
        let tree = about_tree();
        assert_eq!(active_sub(&tree, "/about/online", "about").as_deref(), Some("/about/online"));
        assert_eq!(active_sub(&tree, "/about", "about").as_deref(), Some("/about"));
        assert_eq!(active_sub(&tree, "/about/unknown", "about"), None);
    }

    #[test]
    fn test_root_entry_needs_exact_match() {
        let tree = about_tree();
        // `/about/` is not `/about`, and the root entry never prefix-matches.
        assert_eq!(active_sub(&tree, "/about/", "about"), None);
        assert_eq!(active_sub(&tree, "/aboutus", "about"), None);
    }

    #[test]
    fn test_child_path_activates_prefix_sibling() {
        let tree = about_tree();
        assert_eq!(
            active_sub(&tree, "/about/practice/child", "about").as_deref(),
            Some("/about/practice")
        );
        assert_eq!(
            active_sub(&tree, "/about/online?page=2", "about").as_deref(),
            Some("/about/online")
        );
    }

    #[test]
    fn test_section_link_not_inserted_as_first_sub_page() {
        let tree = NavTree::new(vec![section(
            "news",
            "/news",
            Some(vec![entry("Latest", "/news/latest"), entry("Archive", "/news/archive")]),
        )])
        .unwrap();

        // The section link itself is not a sub-page here.
        assert_eq!(active_sub(&tree, "/news", "news"), None);
        // The first listed entry gets the exact-match rule.
        assert_eq!(active_sub(&tree, "/news/latest", "news").as_deref(), Some("/news/latest"));
        assert_eq!(active_sub(&tree, "/news/latest/1", "news"), None);
        assert_eq!(
            active_sub(&tree, "/news/archive/2024", "news").as_deref(),
            Some("/news/archive")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let tree = NavTree::new(vec![section(
            "forum",
            "/forum",
            Some(vec![
                entry("Forum", "/forum"),
                entry("Topics", "/forum/t"),
                entry("Topic Search", "/forum/topics"),
            ]),
        )])
        .unwrap();

        // Both `/forum/t` and `/forum/topics` are prefixes; list order decides.
        assert_eq!(active_sub(&tree, "/forum/topics", "forum").as_deref(), Some("/forum/t"));
    }

    #[test]
    fn test_section_matched_by_key_not_path() {
        let tree = sample_tree();

        let state = resolve(&tree, &at("/about/online", "home"), DESKTOP, Mode::Interactive);
        assert_eq!(state.active_section_key.as_deref(), Some("home"));
        assert!(!state.is_section_active("about"));
        assert_eq!(state.active_sub_link, None);

        let state = resolve(
            &tree,
            &Location::new("/about/online", None::<String>),
            DESKTOP,
            Mode::Interactive,
        );
        assert_eq!(state, ResolvedState::default());
    }

    #[test]
    fn test_unknown_section_is_all_inactive() {
        let tree = sample_tree();
        let state = resolve(&tree, &at("/about", "nope"), PHONE, Mode::Interactive);
        assert_eq!(state, ResolvedState::default());
        assert!(!state.mobile_expanded);
    }

    #[test]
    fn test_section_without_sub_pages() {
        let tree = sample_tree();
        let state = resolve(&tree, &at("/home", "home"), DESKTOP, Mode::Interactive);
        assert_eq!(state.active_section_key.as_deref(), Some("home"));
        assert_eq!(state.active_sub_link, None);
    }

    #[test]
    fn test_mobile_expanded_only_for_active_section() {
        let tree = sample_tree();

        let state = resolve(&tree, &at("/about", "about"), PHONE, Mode::Interactive);
        assert!(state.mobile_expanded);
        for section in tree.sections() {
            assert_eq!(state.is_expanded(&section.key), section.key == "about");
        }

        let state = resolve(&tree, &at("/about", "about"), DESKTOP, Mode::Interactive);
        assert!(!state.mobile_expanded);
        assert!(tree.sections().iter().all(|s| !state.is_expanded(&s.key)));
    }

    #[test]
    fn test_breakpoint_boundary() {
        assert!(Viewport::new(MOBILE_BREAKPOINT).is_mobile());
        assert!(Viewport::new(0).is_mobile());
        assert!(!Viewport::new(MOBILE_BREAKPOINT + 1).is_mobile());
    }

    #[test]
    fn test_listing_mode_indexes_filtered_list() {
        let tree = sample_tree();

        // Interactive: the hidden download page is index 1 and prefix-matches.
        let state = resolve(&tree, &at("/about/download", "about"), DESKTOP, Mode::Interactive);
        assert_eq!(state.active_sub_link.as_deref(), Some("/about/download"));

        // Listing: the download page is gone, nothing else matches.
        let state = resolve(&tree, &at("/about/download", "about"), DESKTOP, Mode::Listing);
        assert_eq!(state.active_sub_link, None);

        let state = resolve(&tree, &at("/about/practice", "about"), DESKTOP, Mode::Listing);
        assert_eq!(state.active_sub_link.as_deref(), Some("/about/practice"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let tree = sample_tree();
        let location = at("/about/online", "about");
        let first = resolve(&tree, &location, PHONE, Mode::Interactive);
        let second = resolve(&tree, &location, PHONE, Mode::Interactive);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sub_page_matches() {
        let page = entry("About", "/about");
        assert!(sub_page_matches(0, &page, "/about"));
        assert!(!sub_page_matches(0, &page, "/about/online"));
        assert!(sub_page_matches(1, &page, "/about/online"));
        assert!(!sub_page_matches(1, &page, "/home"));
    }

    #[test]
    fn test_resolved_state_serializes() {
        let tree = about_tree();
        let state = resolve(&tree, &at("/about/online", "about"), PHONE, Mode::Interactive);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active_section_key"], "about");
        assert_eq!(json["active_sub_link"], "/about/online");
        assert_eq!(json["mobile_expanded"], true);
    }
}
