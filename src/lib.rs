//! sitenav - navigation menu resolver and link inventory for static sites.
//!
//! The [`nav`] module holds the navigation tree and the pure functions
//! working on it; [`config`] and [`cli`] back the `sitenav` binary.

pub mod cli;
pub mod config;
pub mod logger;
pub mod nav;
pub mod utils;
