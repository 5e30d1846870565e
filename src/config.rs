//! Configuration types shared across the pad UIs.

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::controllers::{PadActionController, WindowController};
use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused widget for embedded dashboards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Show the top button bar (reset, Save PNG, settings).
    pub top_bar: bool,
    /// Show the corner labels.
    pub corner_labels: bool,
    /// Grow/boldify corner labels with the pointer position.
    pub label_emphasis: bool,
    /// Show the corner dots.
    pub corner_dots: bool,
    /// Show the pointer-following crosshair.
    pub crosshair: bool,
    /// Show the three numeric output fields below the pad.
    pub value_readout: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            corner_labels: true,
            label_emphasis: true,
            corner_dots: true,
            crosshair: true,
            value_readout: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responsive layout thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum-size thresholds that control responsive hide/show of UI elements.
#[derive(Clone, Debug)]
pub struct ResponsiveLayout {
    /// Minimum pad width (px) required to draw corner labels. Default: `220.0`.
    pub min_width_for_labels: f32,
    /// Minimum pad height (px) before the top bar hides. Default: `160.0`.
    pub min_height_for_top_bar: f32,
    /// Minimum pad width (px) required to show the value readout. Default: `260.0`.
    pub min_width_for_readout: f32,
}

impl Default for ResponsiveLayout {
    fn default() -> Self {
        Self {
            min_width_for_labels: 220.0,
            min_height_for_top_bar: 160.0,
            min_width_for_readout: 260.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controllers sub-config
// ─────────────────────────────────────────────────────────────────────────────

/// Optional programmatic controllers attached to the pad.
#[derive(Clone, Default)]
pub struct Controllers {
    pub window: Option<WindowController>,
    pub pad_action: Option<PadActionController>,
    pub event: Option<EventController>,
}

// ─────────────────────────────────────────────────────────────────────────────
// TernaryPadConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Overlay callback drawing extra decorations on top of the pad.
///
/// The closure receives the painter clipped to the pad area, the pad-space
/// transform, and the triangle, so decorations can be positioned in the same
/// logical coordinates as the widget itself.
pub type PadOverlay = Box<
    dyn for<'a> FnMut(&egui::Painter, &crate::panel::PadTransform, &crate::data::geometry::Triangle)
        + 'static,
>;

/// Top-level configuration for the ternary pad.
///
/// Organised into sub-configs for clarity:
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `features`     | Toggle individual UI features on/off |
/// | `layout`       | Responsive hide/show thresholds |
/// | `color_scheme` | Predefined visual theme |
/// | `controllers`  | Programmatic interaction handles |
pub struct TernaryPadConfig {
    // ── Pad geometry / labels ────────────────────────────────────────────────
    /// Logical viewport edge length; the triangle margin is one sixth of it.
    pub element_size: f64,
    /// Free-text corner labels, in dimension order (top, right, left).
    pub labels: [String; 3],

    // ── Markers ──────────────────────────────────────────────────────────────
    /// Crosshair marker opacity.
    pub crosshair_opacity: f32,
    /// Selection marker opacity.
    pub selection_opacity: f32,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered inside the UI.
    pub headline: Option<String>,
    /// Optional subheadline below the headline.
    pub subheadline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Feature flags ────────────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,

    // ── Responsive layout ────────────────────────────────────────────────────
    /// Responsive hide/show thresholds for UI elements.
    pub layout: ResponsiveLayout,

    // ── Appearance ───────────────────────────────────────────────────────────
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,
    /// Optional overlay callback drawing custom decorations in pad space.
    pub overlays: Option<PadOverlay>,

    // ── Programmatic controllers ─────────────────────────────────────────────
    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
}

impl Clone for TernaryPadConfig {
    fn clone(&self) -> Self {
        Self {
            element_size: self.element_size,
            labels: self.labels.clone(),
            crosshair_opacity: self.crosshair_opacity,
            selection_opacity: self.selection_opacity,
            title: self.title.clone(),
            headline: self.headline.clone(),
            subheadline: self.subheadline.clone(),
            native_options: self.native_options.clone(),
            features: self.features.clone(),
            layout: self.layout.clone(),
            color_scheme: self.color_scheme.clone(),
            overlays: None, // cannot clone closure
            controllers: self.controllers.clone(),
        }
    }
}

impl Default for TernaryPadConfig {
    fn default() -> Self {
        Self {
            element_size: 600.0,
            labels: [
                "Dimension 1".to_string(),
                "Dimension 2".to_string(),
                "Dimension 3".to_string(),
            ],
            crosshair_opacity: 0.3,
            selection_opacity: 1.0,

            title: "TernPad".to_string(),
            headline: None,
            subheadline: None,
            native_options: None,

            features: FeatureFlags::default(),
            layout: ResponsiveLayout::default(),
            color_scheme: ColorScheme::default(),
            overlays: None,
            controllers: Controllers::default(),
        }
    }
}
