//! Host-facing configuration
//!
//! Where the engine finds things on the host page, plus the RNG seed and log
//! level. Game rules are fixed in [`crate::consts`] and are not configurable.
//! Hosts pass settings as JSON; unknown or missing fields take the defaults.

use serde::{Deserialize, Serialize};

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === DOM anchors ===
    /// Id of the overlay element (created if absent)
    pub overlay_id: String,
    /// Id of the canvas inside the overlay (created if absent)
    pub canvas_id: String,
    /// The window shell hidden while the game runs
    pub shell_selector: String,
    /// The control that launches the game
    pub close_selector: String,
    /// Theme toggle kept reachable on top of the overlay
    pub theme_toggle_selector: String,

    // === Layout ===
    /// Viewports at or below this width use the portrait layout
    pub narrow_breakpoint_px: u32,

    // === Runtime ===
    /// Fixed RNG seed; the wall clock when unset
    pub seed: Option<u64>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overlay_id: "pong-overlay".into(),
            canvas_id: "pong-canvas".into(),
            shell_selector: ".ide-window".into(),
            close_selector: ".window-controls .btn.close".into(),
            theme_toggle_selector: ".theme-toggle".into(),
            narrow_breakpoint_px: 600,
            seed: None,
            log_level: "info".into(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse host-provided JSON, falling back to defaults on absence or error
    pub fn from_host(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid pong settings: {}", e);
                Self::default()
            }
        }
    }

    /// Parsed log level; unrecognized names mean `info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Media query matching the narrow layout
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.narrow_breakpoint_px)
    }

    /// Seed for the next match
    pub fn seed_or(&self, clock_ms: f64) -> u64 {
        self.seed.unwrap_or(clock_ms as u64)
    }
}
