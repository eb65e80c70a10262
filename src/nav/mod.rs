//! Site navigation: data, active-link resolution, link inventory and markup.
//!
//! ```text
//! nav.toml / nav.json ──► NavTree ──┬──► resolve() ──► ResolvedState ──► NavRenderer ──► HTML
//!                                   │                        └─────────► MenuState
//!                                   └──► extract_links() ──► sorted paths
//! ```
//!
//! The tree is built once and only ever borrowed; resolving, extracting and
//! rendering are pure functions of their arguments.

mod error;
mod host;
mod links;
mod load;
mod menu;
mod render;
mod resolve;
mod types;

pub use error::NavError;
pub use host::{HostPage, absolute_path};
pub use links::{THANK_YOU_PATH, extract_links, extract_links_with};
pub use menu::{ClickOutcome, MenuState};
pub use render::NavRenderer;
pub use resolve::{Location, MOBILE_BREAKPOINT, ResolvedState, Viewport, resolve, sub_page_matches};
pub use types::{Mode, NavEntry, NavSection, NavTree};
