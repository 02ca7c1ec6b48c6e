//! Theme colors read from the host page
//!
//! Snapshotted on every paint so a theme switch shows up on the next frame.

use serde::{Deserialize, Serialize};

/// CSS custom properties the host page defines its palette with
pub const VAR_BACKGROUND: &str = "--panel-2";
pub const VAR_FOREGROUND: &str = "--text";
pub const VAR_BORDER: &str = "--border";
pub const VAR_ACCENT: &str = "--accent";

/// Read-only palette snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#11151c".into(),
            foreground: "#e6edf3".into(),
            border: "#1f242d".into(),
            accent: "#58a6ff".into(),
        }
    }
}

impl Theme {
    /// Build from a CSS variable lookup; blank or missing values fall back one by one
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |name: &str, fallback: String| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };
        Self {
            background: pick(VAR_BACKGROUND, defaults.background),
            foreground: pick(VAR_FOREGROUND, defaults.foreground),
            border: pick(VAR_BORDER, defaults.border),
            accent: pick(VAR_ACCENT, defaults.accent),
        }
    }
}
