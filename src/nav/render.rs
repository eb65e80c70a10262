//! HTML rendering of the navigation menu.
//!
//! Applies a [`ResolvedState`] to menu markup. The produced fragments are
//! meant to be spliced into the host page's navigation containers.
//!
//! # Class Vocabulary
//!
//! | Element                    | Classes                                             |
//! |----------------------------|-----------------------------------------------------|
//! | main nav `<li>`            | `main-nav-item`                                     |
//! | main nav `<a>`             | `main-nav-link` `nav-item-with-submenu` `active` `open` |
//! | mobile submenu `<div>`     | `mobile-submenu` `open`                             |
//! | submenu `<a>`              | `active`                                            |
//! | secondary nav `<li>`       | `secondary-nav-li`                                  |
//! | secondary nav `<a>`        | `secondary-nav-link` `active`                       |

use super::resolve::ResolvedState;
use super::types::{Mode, NavEntry, NavSection, NavTree};
use crate::utils::escape::escape_html;
use std::fmt::Write;

/// Renders menu fragments for one resolved location.
#[derive(Debug, Clone, Copy)]
pub struct NavRenderer<'a> {
    tree: &'a NavTree,
    state: &'a ResolvedState,
    mode: Mode,
}

impl<'a> NavRenderer<'a> {
    pub const fn new(tree: &'a NavTree, state: &'a ResolvedState, mode: Mode) -> Self {
        Self { tree, state, mode }
    }

    /// Main navigation: one `<li>` per visible section, one per line.
    pub fn main_nav(&self) -> String {
        let mut html = String::with_capacity(256 * self.tree.len());
        for section in self.tree.visible_sections(self.mode) {
            self.write_main_item(&mut html, section);
            html.push('\n');
        }
        html
    }

    /// Secondary navigation for section `key`.
    ///
    /// `None` when the section is unknown or has nothing to list in this
    /// mode, in which case the host hides its secondary list. A section whose
    /// sub-pages are all `skip_in_listing` counts as empty in listing mode
    /// rather than producing an empty list.
    pub fn secondary_nav(&self, key: &str) -> Option<String> {
        let section = self.tree.get(key)?;
        let pages: Vec<&NavEntry> = section.visible_sub_pages(self.mode).collect();
        if pages.is_empty() {
            return None;
        }

        let mut html = String::with_capacity(128 * pages.len());
        for page in pages {
            let _ = writeln!(
                html,
                r#"<li class="secondary-nav-li"><a href="{}" class="secondary-nav-link{}">{}</a></li>"#,
                escape_html(&page.link),
                self.active_suffix(&page.link),
                escape_html(&page.title),
            );
        }
        Some(html)
    }

    fn write_main_item(&self, html: &mut String, section: &NavSection) {
        let pages: Vec<&NavEntry> = section.visible_sub_pages(self.mode).collect();
        let has_submenu = !pages.is_empty();
        let active = self.state.is_section_active(&section.key);
        let open = self.state.is_expanded(&section.key);
        let key = escape_html(&section.key);

        let mut class = String::from("main-nav-link");
        if has_submenu {
            class.push_str(" nav-item-with-submenu");
        }
        if active {
            class.push_str(" active");
        }
        if open {
            class.push_str(" open");
        }

        html.push_str(r#"<li class="main-nav-item">"#);
        let _ = write!(
            html,
            r#"<a href="{}" class="{class}" data-page="{key}">{}</a>"#,
            escape_html(&section.link),
            escape_html(&section.title),
        );

        if has_submenu {
            let open_class = if open { " open" } else { "" };
            let _ = write!(
                html,
                r#"<div class="mobile-submenu{open_class}" id="submenu-{key}">"#
            );
            for page in pages {
                let class_attr = if self.state.is_sub_active(&page.link) {
                    r#" class="active""#
                } else {
                    ""
                };
                let _ = write!(
                    html,
                    r#"<a href="{}"{class_attr}>{}</a>"#,
                    escape_html(&page.link),
                    escape_html(&page.title),
                );
            }
            html.push_str("</div>");
        }

        html.push_str("</li>");
    }

    #[inline]
    fn active_suffix(&self, link: &str) -> &'static str {
        if self.state.is_sub_active(link) {
            " active"
        } else {
            ""
        }
    }
}
