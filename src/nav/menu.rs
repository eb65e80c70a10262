//! Open/closed state of the mobile menu.
//!
//! Models the click behaviour of the hamburger button and the section links
//! as pure transitions, so the host only has to mirror [`MenuState`] onto
//! its `open` classes.

use super::resolve::{ResolvedState, Viewport};
use super::types::{Mode, NavTree};

/// What the host should do with a section link click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the browser follow the link.
    Follow,
    /// Link suppressed; a submenu was opened or closed instead.
    Toggled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Hamburger menu expanded.
    pub main_open: bool,
    /// Key of the section whose submenu is expanded. At most one.
    pub open_submenu: Option<String>,
}

impl MenuState {
    /// State right after page load.
    pub fn initial(state: &ResolvedState) -> Self {
        let open_submenu = if state.mobile_expanded {
            state.active_section_key.clone()
        } else {
            None
        };
        Self {
            main_open: false,
            open_submenu,
        }
    }

    pub fn toggle_main(&mut self) {
        self.main_open = !self.main_open;
    }

    pub fn is_submenu_open(&self, key: &str) -> bool {
        self.open_submenu.as_deref() == Some(key)
    }

    /// Handle a click on the main link of section `key`.
    ///
    /// On mobile, sections rendered with a submenu in `mode` toggle it
    /// instead of navigating; opening one closes any other.
    pub fn click_section(
        &mut self,
        tree: &NavTree,
        key: &str,
        viewport: Viewport,
        mode: Mode,
    ) -> ClickOutcome {
        let has_submenu = tree
            .get(key)
            .filter(|section| mode.shows(section.skip_in_listing))
            .is_some_and(|section| section.visible_sub_pages(mode).next().is_some());
        if !viewport.is_mobile() || !has_submenu {
            return ClickOutcome::Follow;
        }

        self.open_submenu = if self.is_submenu_open(key) {
            None
        } else {
            Some(key.to_owned())
        };
        ClickOutcome::Toggled
    }
}
