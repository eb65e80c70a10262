//! Navigation tree types.
//!
//! A [`NavTree`] is an ordered list of top-level [`NavSection`]s, each
//! optionally owning an ordered list of [`NavEntry`] sub-pages. Trees are
//! only built through [`NavTree::new`], which rejects malformed data, and are
//! never mutated afterwards.

use super::error::NavError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

// ============================================================================
// Mode
// ============================================================================

/// Rendering context for the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Live menu: every entry is shown.
    #[default]
    Interactive,
    /// Doc mode: entries flagged `skip_in_listing` are left out.
    Listing,
}

impl Mode {
    pub const fn from_doc_mode(doc_mode: bool) -> Self {
        if doc_mode { Self::Listing } else { Self::Interactive }
    }

    pub const fn is_listing(self) -> bool {
        matches!(self, Self::Listing)
    }

    /// Whether an entry with the given flag is shown in this mode.
    #[inline]
    pub const fn shows(self, skip_in_listing: bool) -> bool {
        !(self.is_listing() && skip_in_listing)
    }
}

// ============================================================================
// Entries
// ============================================================================

/// A single navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub title: String,
    pub link: String,
    #[serde(default, alias = "skipInListing", alias = "skipInDocMode")]
    pub skip_in_listing: bool,
}

/// A top-level section of the menu.
///
/// By convention the first sub-page repeats the section's own `link`: it is
/// the section's implicit root page, and active-link resolution matches the
/// first sub-page exactly rather than by prefix. The list is used as written;
/// `link` is never inserted into it, so data that breaks the convention gets
/// exact matching on whatever entry comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
    /// Section identifier. Filled from the object key for JSON data.
    #[serde(default)]
    pub key: String,
    pub title: String,
    pub link: String,
    #[serde(default, alias = "skipInListing", alias = "skipInDocMode")]
    pub skip_in_listing: bool,
    #[serde(default, alias = "subPages", skip_serializing_if = "Option::is_none")]
    pub sub_pages: Option<Vec<NavEntry>>,
}

impl NavSection {
    /// True when the section owns at least one sub-page.
    pub fn has_sub_pages(&self) -> bool {
        self.sub_pages.as_ref().is_some_and(|pages| !pages.is_empty())
    }

    /// Sub-pages shown in `mode`, in display order.
    ///
    /// Indexes used for active-link matching refer to this filtered sequence.
    pub fn visible_sub_pages(&self, mode: Mode) -> impl Iterator<Item = &NavEntry> {
        self.sub_pages
            .iter()
            .flatten()
            .filter(move |page| mode.shows(page.skip_in_listing))
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Validated, immutable navigation hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    sections: Vec<NavSection>,
}

impl NavTree {
    /// Build a tree, rejecting duplicate keys, empty links and duplicate
    /// sub-page links within a section.
    pub fn new(sections: Vec<NavSection>) -> Result<Self, NavError> {
        validate(&sections)?;
        Ok(Self { sections })
    }

    /// Look up a section by key.
    pub fn get(&self, key: &str) -> Option<&NavSection> {
        self.sections.iter().find(|section| section.key == key)
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Sections shown in `mode`, in display order.
    pub fn visible_sections(&self, mode: Mode) -> impl Iterator<Item = &NavSection> {
        self.sections
            .iter()
            .filter(move |section| mode.shows(section.skip_in_listing))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Check the structural invariants of a section list.
fn validate(sections: &[NavSection]) -> Result<(), NavError> {
    let mut keys = FxHashSet::default();

    for section in sections {
        if section.key.trim().is_empty() {
            return Err(NavError::EmptyKey(section.title.clone()));
        }
        if !keys.insert(section.key.as_str()) {
            return Err(NavError::DuplicateSection(section.key.clone()));
        }
        if section.link.trim().is_empty() {
            return Err(NavError::MissingLink {
                section: section.key.clone(),
                title: section.title.clone(),
            });
        }

        let mut links = FxHashSet::default();
        for page in section.sub_pages.iter().flatten() {
            if page.link.trim().is_empty() {
                return Err(NavError::MissingLink {
                    section: section.key.clone(),
                    title: page.title.clone(),
                });
            }
            if !links.insert(page.link.as_str()) {
                return Err(NavError::DuplicateSubPage {
                    section: section.key.clone(),
                    link: page.link.clone(),
                });
            }
        }
    }

    Ok(())
}

// ============================================================================
// Test Fixtures
// ============================================================================
