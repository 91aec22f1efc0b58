//! Settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web build; defaults on native.

use serde::{Deserialize, Serialize};

/// Shadow map resolution presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShadowQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl ShadowQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowQuality::Low => "Low",
            ShadowQuality::Medium => "Medium",
            ShadowQuality::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(ShadowQuality::Low),
            "medium" | "med" => Some(ShadowQuality::Medium),
            "high" => Some(ShadowQuality::High),
            _ => None,
        }
    }

    /// Shadow map edge length in texels
    pub fn resolution(&self) -> u32 {
        match self {
            ShadowQuality::Low => 256,
            ShadowQuality::Medium => 512,
            ShadowQuality::High => 1024,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Shadow map resolution preset
    pub shadow_quality: ShadowQuality,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shadow_quality: ShadowQuality::Medium,
            show_fps: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "cube_bounce_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            shadow_quality: ShadowQuality::High,
            show_fps: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shadow_quality, ShadowQuality::High);
        assert!(!back.show_fps);
    }

    #[test]
    fn test_quality_resolutions() {
        assert_eq!(ShadowQuality::Low.resolution(), 256);
        assert_eq!(ShadowQuality::Medium.resolution(), 512);
        assert_eq!(ShadowQuality::High.resolution(), 1024);
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!(ShadowQuality::from_str("med"), Some(ShadowQuality::Medium));
        assert_eq!(ShadowQuality::from_str("HIGH"), Some(ShadowQuality::High));
        assert_eq!(ShadowQuality::from_str("ultra"), None);
    }
}
