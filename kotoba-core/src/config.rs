use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static visual configuration shared by every view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    /// Base spacing unit in pixels
    pub spacing_px: u16,
    /// Card corner radius in pixels
    pub radius_px: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub error: String,
    pub success: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#5b5bd6".to_string(),
            secondary: "#e5484d".to_string(),
            background: "#f8f9fc".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1c2024".to_string(),
            text_muted: "#60646c".to_string(),
            error: "#d32f2f".to_string(),
            success: "#2e7d32".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            spacing_px: 8,
            radius_px: 16,
        }
    }
}

impl Theme {
    /// Render the theme as CSS custom properties for the app root `style` attribute.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        [
            ("primary", p.primary.as_str()),
            ("secondary", p.secondary.as_str()),
            ("background", p.background.as_str()),
            ("surface", p.surface.as_str()),
            ("text", p.text.as_str()),
            ("text-muted", p.text_muted.as_str()),
            ("error", p.error.as_str()),
            ("success", p.success.as_str()),
        ]
        .iter()
        .map(|(name, value)| format!("--kotoba-{name}: {value};"))
        .chain([
            format!("--kotoba-spacing: {}px;", self.spacing_px),
            format!("--kotoba-radius: {}px;", self.radius_px),
        ])
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Application configuration. Every field is optional in an override document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    /// `EnvFilter` directives for the console logger
    pub log_filter: String,
    /// Storage key for the persisted session
    pub session_storage_key: String,
    /// Simulated round-trip time of the mock auth service
    pub auth_latency_ms: u32,
}

impl AppConfig {
    /// Storage key under which an override document may be stored.
    pub const OVERRIDE_KEY: &'static str = "kotoba.config";

    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_filter: "kotoba_ui=debug,kotoba_core=debug".to_string(),
            session_storage_key: "kotoba.session".to_string(),
            auth_latency_ms: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"auth_latency_ms": 0, "theme": {"radius_px": 4}}"#)
            .unwrap();
        assert_eq!(config.auth_latency_ms, 0);
        assert_eq!(config.theme.radius_px, 4);
        assert_eq!(config.theme.spacing_px, 8);
        assert_eq!(config.session_storage_key, "kotoba.session");
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.contains("--kotoba-primary: #5b5bd6;"));
        assert!(css.contains("--kotoba-text-muted: #60646c;"));
        assert!(css.ends_with("--kotoba-radius: 16px;"));
    }
}
