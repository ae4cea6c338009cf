use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::panel::PanelId;

/// Localized panel titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTitles {
    pub not_enough_space: String,
    pub status: String,
    pub services: String,
    pub containers: String,
    pub images: String,
}

impl Default for PanelTitles {
    fn default() -> Self {
        Self {
            not_enough_space: "Not enough space to render panels".to_string(),
            status: "Status".to_string(),
            services: "Services".to_string(),
            containers: "Containers".to_string(),
            images: "Images".to_string(),
        }
    }
}

impl PanelTitles {
    pub fn title_for(&self, id: PanelId) -> Option<&str> {
        match id {
            PanelId::Limit => Some(self.not_enough_space.as_str()),
            PanelId::Status => Some(self.status.as_str()),
            PanelId::Services => Some(self.services.as_str()),
            PanelId::Containers => Some(self.containers.as_str()),
            PanelId::Images => Some(self.images.as_str()),
            PanelId::Main
            | PanelId::Options
            | PanelId::AppStatus
            | PanelId::Information
            | PanelId::Menu
            | PanelId::Confirmation => None,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Version string shown in the information zone; may carry color escapes.
    pub version: String,
    /// Color name for the options hint text.
    pub options_text_color: String,
    pub titles: PanelTitles,
    /// Emit a metrics snapshot every N ticks. Zero disables snapshots.
    pub metrics_interval_ticks: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            options_text_color: "blue".to_string(),
            titles: PanelTitles::default(),
            metrics_interval_ticks: 0,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn options_color(&self) -> Result<Color> {
        resolve_color(&self.options_text_color)
    }
}

/// Resolve a color name such as `blue` or `dark_green`.
pub fn resolve_color(name: &str) -> Result<Color> {
    Color::try_from(name).map_err(|_| LayoutError::Color(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            LayoutConfig::from_json_str(r#"{"version":"v2.0.1","titles":{"images":"Bilder"}}"#)
                .unwrap();
        assert_eq!(config.version, "v2.0.1");
        assert_eq!(config.titles.images, "Bilder");
        assert_eq!(config.titles.services, "Services");
        assert_eq!(config.options_text_color, "blue");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LayoutConfig::from_json_str("{version:").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn color_names_resolve() {
        assert_eq!(resolve_color("blue").unwrap(), Color::Blue);
        assert_eq!(resolve_color("dark_green").unwrap(), Color::DarkGreen);
        assert!(matches!(
            resolve_color("ultraviolet"),
            Err(LayoutError::Color(name)) if name == "ultraviolet"
        ));
    }

    #[test]
    fn only_titled_panels_have_titles() {
        let titles = PanelTitles::default();
        assert_eq!(titles.title_for(PanelId::Containers), Some("Containers"));
        assert_eq!(titles.title_for(PanelId::Main), None);
    }
}
