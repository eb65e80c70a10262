//! Navigation data loading.
//!
//! # Formats
//!
//! TOML, one `[[section]]` table per section:
//!
//! ```toml
//! [[section]]
//! key = "about"
//! title = "About"
//! link = "/about"
//! sub_pages = [
//!     { title = "Overview", link = "/about" },
//!     { title = "Online", link = "/about/online" },
//! ]
//! ```
//!
//! JSON, an object keyed by section (key order is display order), the shape
//! of the `navData` table in the site's scripts:
//!
//! ```json
//! { "about": { "title": "About", "link": "/about",
//!              "subPages": [{ "title": "Overview", "link": "/about" }] } }
//! ```
//!
//! A JSON array of sections carrying their own `key` is accepted as well.

use super::error::NavError;
use super::types::{NavSection, NavTree};
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use std::{fmt, fs, path::Path};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlNavData {
    #[serde(default)]
    section: Vec<NavSection>,
}

/// JSON sections in document order.
///
/// Object entries are read one by one instead of through a map, so a
/// repeated key reaches [`NavTree::new`] and is rejected there.
struct JsonNavData(Vec<NavSection>);

impl<'de> Deserialize<'de> for JsonNavData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonNavVisitor)
    }
}

struct JsonNavVisitor;

impl<'de> Visitor<'de> for JsonNavVisitor {
    type Value = JsonNavData;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by section or an array of sections")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, mut section)) = map.next_entry::<String, NavSection>()? {
            section.key = key;
            sections.push(section);
        }
        Ok(JsonNavData(sections))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut sections = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(section) = seq.next_element::<NavSection>()? {
            sections.push(section);
        }
        Ok(JsonNavData(sections))
    }
}

impl NavTree {
    /// Load and validate a tree from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> Result<Self, NavError> {
        let content =
            fs::read_to_string(path).map_err(|err| NavError::Io(path.to_path_buf(), err))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(NavError::Format(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        let data: TomlNavData = toml::from_str(content)?;
        Self::new(data.section)
    }

    pub fn from_json_str(content: &str) -> Result<Self, NavError> {
        let JsonNavData(sections) = serde_json::from_str(content)?;
        Self::new(sections)
    }
}
