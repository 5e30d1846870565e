//! Color scheme definitions for the ternary pad.
//!
//! A scheme bundles egui visuals with the "ink" used for the pad itself:
//! polygon outline, corner dots, marker strokes, and label text.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Colors used to draw the pad shape and markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadInk {
    /// Polygon outline and corner dots.
    pub outline: Color32,
    /// Crosshair and selection marker strokes.
    pub marker: Color32,
    /// Corner label text at full emphasis.
    pub label: Color32,
    /// Polygon fill.
    pub fill: Color32,
}

impl PadInk {
    const DARK: PadInk = PadInk {
        outline: Color32::from_rgb(0xd0, 0xd0, 0xd0),
        marker: Color32::from_rgb(0xe8, 0xe8, 0xe8),
        label: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        fill: Color32::from_rgb(0x20, 0x20, 0x24),
    };
    const LIGHT: PadInk = PadInk {
        outline: Color32::from_rgb(0x00, 0x00, 0x00),
        marker: Color32::from_rgb(0x00, 0x00, 0x00),
        label: Color32::from_rgb(0x00, 0x00, 0x00),
        fill: Color32::WHITE,
    };
}

// Global ink used by the pad painter. Updated whenever a color scheme is
// applied; the value is copied out so callers can freely use it per frame.
static GLOBAL_INK: Lazy<Mutex<PadInk>> = Lazy::new(|| Mutex::new(PadInk::DARK));

/// Get a copy of the current pad ink.
pub fn pad_ink() -> PadInk {
    *GLOBAL_INK.lock().unwrap()
}

/// Update the global pad ink. Called automatically when a [`ColorScheme`] is
/// applied, but user code (or tests) may call it directly.
pub(crate) fn set_pad_ink(new: PadInk) {
    let mut guard = GLOBAL_INK.lock().unwrap();
    *guard = new;
}

/// Visual theme for the pad UI, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// Follow the eframe default (dark).
    Dark,
    /// Light theme, matching the original black-on-white rendering.
    Light,
    /// Solarized Dark.
    SolarizedDark,
    /// Solarized Light.
    SolarizedLight,
    /// High-contrast: pure-black background with white ink.
    HighContrast,
    /// User-defined custom color scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for the egui context (optional, fallback to dark/light).
    pub visuals: Option<Visuals>,
    /// Ink used for the pad shape and markers.
    pub ink: PadInk,
    /// Optional label for UI display.
    pub label: Option<String>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::SolarizedDark,
            ColorScheme::SolarizedLight,
            ColorScheme::HighContrast,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::SolarizedDark => "Solarized Dark".to_string(),
            ColorScheme::SolarizedLight => "Solarized Light".to_string(),
            ColorScheme::HighContrast => "High Contrast".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Look up a built-in scheme by its label.
    pub fn from_label(label: &str) -> Option<ColorScheme> {
        Self::all().iter().find(|s| s.label() == label).cloned()
    }

    /// The ink this scheme uses for the pad shape.
    pub fn ink(&self) -> PadInk {
        match self {
            ColorScheme::Dark => PadInk::DARK,
            ColorScheme::Light => PadInk::LIGHT,
            ColorScheme::SolarizedDark => PadInk {
                outline: Color32::from_rgb(131, 148, 150),
                marker: Color32::from_rgb(147, 161, 161),
                label: Color32::from_rgb(238, 232, 213),
                fill: Color32::from_rgb(0, 43, 54),
            },
            ColorScheme::SolarizedLight => PadInk {
                outline: Color32::from_rgb(101, 123, 131),
                marker: Color32::from_rgb(88, 110, 117),
                label: Color32::from_rgb(7, 54, 66),
                fill: Color32::from_rgb(253, 246, 227),
            },
            ColorScheme::HighContrast => PadInk {
                outline: Color32::WHITE,
                marker: Color32::WHITE,
                label: Color32::WHITE,
                fill: Color32::BLACK,
            },
            ColorScheme::Custom(custom) => custom.ink,
        }
    }

    /// Apply this scheme's visuals to an egui context and install its ink.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::SolarizedDark => {
                let mut v = Visuals::dark();
                let base03 = Color32::from_rgb(0, 43, 54);
                let base02 = Color32::from_rgb(7, 54, 66);
                let base01 = Color32::from_rgb(88, 110, 117);
                let base0 = Color32::from_rgb(131, 148, 150);
                v.panel_fill = base03;
                v.window_fill = base02;
                v.extreme_bg_color = base03;
                v.faint_bg_color = base02;
                v.override_text_color = Some(base0);
                v.widgets.noninteractive.bg_fill = base02;
                v.widgets.noninteractive.fg_stroke.color = base0;
                v.widgets.inactive.bg_fill = base02;
                v.widgets.inactive.fg_stroke.color = base01;
                v.widgets.hovered.bg_fill = base01;
                v.widgets.active.bg_fill = base01;
                ctx.set_visuals(v);
            }
            ColorScheme::SolarizedLight => {
                let mut v = Visuals::light();
                let base3 = Color32::from_rgb(253, 246, 227);
                let base2 = Color32::from_rgb(238, 232, 213);
                let base00 = Color32::from_rgb(101, 123, 131);
                v.panel_fill = base3;
                v.window_fill = base2;
                v.extreme_bg_color = base3;
                v.faint_bg_color = base2;
                v.override_text_color = Some(base00);
                v.widgets.noninteractive.bg_fill = base2;
                v.widgets.noninteractive.fg_stroke.color = base00;
                v.widgets.inactive.bg_fill = base2;
                v.widgets.inactive.fg_stroke.color = base00;
                ctx.set_visuals(v);
            }
            ColorScheme::HighContrast => {
                let mut v = Visuals::dark();
                v.panel_fill = Color32::BLACK;
                v.window_fill = Color32::BLACK;
                v.extreme_bg_color = Color32::BLACK;
                v.override_text_color = Some(Color32::WHITE);
                ctx.set_visuals(v);
            }
            ColorScheme::Custom(custom) => {
                if let Some(v) = &custom.visuals {
                    ctx.set_visuals(v.clone());
                }
            }
        }
        set_pad_ink(self.ink());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_builtins() {
        for scheme in ColorScheme::all() {
            let found = ColorScheme::from_label(&scheme.label());
            assert_eq!(found.as_ref(), Some(scheme));
        }
        assert!(ColorScheme::from_label("No Such Scheme").is_none());
    }

    #[test]
    fn every_builtin_has_distinct_fill_and_outline() {
        for scheme in ColorScheme::all() {
            let ink = scheme.ink();
            assert_ne!(ink.outline, ink.fill, "{} ink is unreadable", scheme.label());
        }
    }
}
