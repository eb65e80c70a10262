//! Values the host page hands over before the menu is built.
//!
//! The server-rendered header carries three data attributes:
//! `data-mount` (current path, usually without the leading `/`),
//! `data-root` (current section key) and `data-docmode`.

use super::resolve::Location;
use super::types::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPage {
    pub location: Location,
    pub mode: Mode,
}

impl HostPage {
    /// Build from the raw header attributes.
    ///
    /// Any non-empty `docmode` value selects listing mode.
    pub fn from_attributes(mount: &str, root: &str, docmode: Option<&str>) -> Self {
        let root = root.trim();
        let section = (!root.is_empty()).then(|| root.to_owned());
        let doc_mode = docmode.is_some_and(|value| !value.is_empty());

        Self {
            location: Location {
                path: absolute_path(mount),
                section,
            },
            mode: Mode::from_doc_mode(doc_mode),
        }
    }
}

/// Prefix `/` unless already absolute.
pub fn absolute_path(mount: &str) -> String {
    let mount = mount.trim();
    if mount.starts_with('/') {
        mount.to_owned()
    } else {
        format!("/{mount}")
    }
}
