//! Settings persistence: save and load pad settings to/from JSON or YAML.
//!
//! Only widget *settings* are persisted (labels, sizes, opacities, feature
//! flags, scheme label) — never a user's selection. The format is chosen by
//! file extension: `.yaml`/`.yml` uses YAML, everything else JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{FeatureFlags, TernaryPadConfig};

/// Serializable snapshot of pad settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadSettings {
    /// Logical viewport edge length.
    pub element_size: f64,
    /// Corner labels in dimension order.
    pub labels: [String; 3],
    pub crosshair_opacity: f32,
    pub selection_opacity: f32,
    pub features: FeatureFlags,
    /// Built-in color scheme label, if one should be applied on load.
    pub color_scheme: Option<String>,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self::from(&TernaryPadConfig::default())
    }
}

impl From<&TernaryPadConfig> for PadSettings {
    fn from(cfg: &TernaryPadConfig) -> Self {
        Self {
            element_size: cfg.element_size,
            labels: cfg.labels.clone(),
            crosshair_opacity: cfg.crosshair_opacity,
            selection_opacity: cfg.selection_opacity,
            features: cfg.features.clone(),
            color_scheme: Some(cfg.color_scheme.label()),
        }
    }
}

impl PadSettings {
    /// Apply these settings onto a configuration.
    pub fn apply_to(&self, cfg: &mut TernaryPadConfig) {
        cfg.element_size = self.element_size;
        cfg.labels = self.labels.clone();
        cfg.crosshair_opacity = self.crosshair_opacity;
        cfg.selection_opacity = self.selection_opacity;
        cfg.features = self.features.clone();
        if let Some(label) = &self.color_scheme {
            if let Some(scheme) = crate::color_scheme::ColorScheme::from_label(label) {
                cfg.color_scheme = scheme;
            }
        }
    }

    /// Serialize to a file; YAML for `.yaml`/`.yml`, JSON otherwise.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let text = if is_yaml(path) {
            serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| format!("Serialization error: {}", e))?
        };
        std::fs::write(path, text).map_err(|e| format!("Write error: {}", e))
    }

    /// Deserialize from a file; format chosen by extension as in
    /// [`save_to_path`](Self::save_to_path).
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| format!("Read error: {}", e))?;
        if is_yaml(path) {
            serde_yaml::from_str(&text).map_err(|e| format!("Deserialization error: {}", e))
        } else {
            serde_json::from_str(&text).map_err(|e| format!("Deserialization error: {}", e))
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let mut settings = PadSettings::default();
        settings.labels = ["Hope".into(), "Dread".into(), "Frustration".into()];
        settings.element_size = 480.0;

        let dir = std::env::temp_dir();
        let path = dir.join("ternpad_settings_test.json");
        settings.save_to_path(&path).unwrap();
        let loaded = PadSettings::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.labels, settings.labels);
        assert_eq!(loaded.element_size, 480.0);
    }

    #[test]
    fn yaml_round_trip() {
        let settings = PadSettings::default();
        let dir = std::env::temp_dir();
        let path = dir.join("ternpad_settings_test.yaml");
        settings.save_to_path(&path).unwrap();
        let loaded = PadSettings::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.element_size, settings.element_size);
        assert_eq!(loaded.color_scheme, settings.color_scheme);
    }

    #[test]
    fn settings_apply_back_onto_a_config() {
        let mut settings = PadSettings::default();
        settings.element_size = 900.0;
        settings.color_scheme = Some("High Contrast".to_string());

        let mut cfg = TernaryPadConfig::default();
        settings.apply_to(&mut cfg);
        assert_eq!(cfg.element_size, 900.0);
        assert_eq!(cfg.color_scheme.label(), "High Contrast");
    }
}
