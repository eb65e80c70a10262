//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "<YOUR_SITE>".into()
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "nav.toml".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    /// Desktop width, comfortably above the mobile breakpoint.
    pub fn width() -> u32 {
        1024
    }
}
