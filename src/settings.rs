//! Game settings
//!
//! Nothing is stored between sessions; on the web, settings come from the
//! page URL query string (e.g. `?mute=1&shake=0&volume=0.5`).

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Visual Effects ===
    /// Screen shake on hazard contact
    pub screen_shake: bool,
    /// Win particle burst
    pub particles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start muted
    pub muted: bool,

    /// Reduced motion (no shake, calmer goal pulse)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            particles: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Apply `key=value` pairs from a URL query string. Unknown keys and
    /// unparsable values are logged and skipped.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
            let applied = match key {
                "shake" => parse_flag(value).map(|v| settings.screen_shake = v),
                "particles" => parse_flag(value).map(|v| settings.particles = v),
                "mute" | "muted" => parse_flag(value).map(|v| settings.muted = v),
                "reduced_motion" => parse_flag(value).map(|v| settings.reduced_motion = v),
                "volume" => parse_volume(value).map(|v| settings.master_volume = v),
                "sfx" => parse_volume(value).map(|v| settings.sfx_volume = v),
                _ => None,
            };
            if applied.is_none() {
                log::warn!("Ignoring setting {:?}", pair);
            }
        }

        settings
    }

    /// Read settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window().and_then(|w| w.location().search().ok());
        match query {
            Some(query) if !query.is_empty() => {
                let settings = Self::from_query(&query);
                log::info!("Settings from URL: {:?}", settings);
                settings
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_volume(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().map(|v| v.clamp(0.0, 1.0))
}
