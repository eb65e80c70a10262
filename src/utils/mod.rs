//! Utility modules shared by the renderer and commands.

pub mod escape;
pub mod minify;
