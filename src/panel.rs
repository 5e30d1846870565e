//! The embeddable ternary pad widget.
//!
//! [`TernaryPadPanel`] owns the interaction state machine, the visual state
//! it projects onto, and the optional controllers. It can be used:
//!
//! * **Standalone** – wrapped inside [`TernaryPadApp`](crate::app::TernaryPadApp)
//!   and driven by the eframe event loop.
//! * **Embedded** – placed inside a parent egui application via
//!   [`TernaryPadPanel::update`].

use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};
use egui::epaint::PathShape;
use egui_phosphor::regular::{ARROW_COUNTER_CLOCKWISE, CAMERA, FLOPPY_DISK, FOLDER_OPEN};
use image::{Rgba, RgbaImage};

use crate::color_scheme;
use crate::config::{FeatureFlags, PadOverlay, ResponsiveLayout, TernaryPadConfig};
use crate::controllers::{PadActionController, ValuesSnapshot};
use crate::data::emphasis::LabelEmphasis;
use crate::data::geometry::{Dimension, Triangle};
use crate::data::interaction::{Effect, Interaction, PadInput, Phase};
use crate::events::{
    EventController, EventKind, MarkerMeta, PadEvent, PointerMeta, ResizeMeta, ScreenPos,
    ValuesMeta,
};
use crate::persistence::PadSettings;
use crate::view::{self, MarkerId, PadView};

/// Assigns unique IDs to panel instances so multiple pads can coexist
/// without egui ID collisions.
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Environment variable carrying a non-interactive screenshot target path.
const SCREENSHOT_ENV: &str = "TERNPAD_SAVE_SCREENSHOT_TO";

// ─────────────────────────────────────────────────────────────────────────────
// Pad-space transform
// ─────────────────────────────────────────────────────────────────────────────

/// Maps between pad space (logical `element_size` square) and screen pixels.
///
/// The pad keeps a fixed square aspect; the transform simply scales and
/// translates, so pad-space distances stay proportional on screen.
#[derive(Debug, Clone, Copy)]
pub struct PadTransform {
    rect: egui::Rect,
    element_size: f32,
}

impl PadTransform {
    pub fn new(rect: egui::Rect, element_size: f64) -> Self {
        Self {
            rect,
            element_size: element_size as f32,
        }
    }

    /// The screen rectangle the pad occupies.
    #[inline]
    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    /// Screen pixels per pad unit.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.rect.width() / self.element_size
    }

    /// Convert a screen position to pad space.
    pub fn to_pad(&self, pos: Pos2) -> [f64; 2] {
        let s = self.scale();
        [
            ((pos.x - self.rect.left()) / s) as f64,
            ((pos.y - self.rect.top()) / s) as f64,
        ]
    }

    /// Convert a pad-space point to a screen position.
    pub fn to_screen(&self, point: [f64; 2]) -> Pos2 {
        let s = self.scale();
        Pos2::new(
            self.rect.left() + point[0] as f32 * s,
            self.rect.top() + point[1] as f32 * s,
        )
    }

    /// Scale a pad-space length to screen pixels.
    #[inline]
    pub fn px(&self, length: f64) -> f32 {
        length as f32 * self.scale()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visual state – the bundled PadView implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the painter needs that the state machine mutates.
#[derive(Debug, Clone)]
pub struct PadVisuals {
    pub crosshair: [f64; 2],
    pub selection: [f64; 2],
    pub selection_visible: bool,
    pub emphasis: [LabelEmphasis; 3],
    /// Output-field values; `None` until the first write.
    pub values: Option<[f64; 3]>,
}

impl PadVisuals {
    fn new(triangle: &Triangle) -> Self {
        // Both markers start parked at the centroid, as drawn before any
        // interaction.
        let centroid = triangle.centroid();
        Self {
            crosshair: centroid,
            selection: centroid,
            selection_visible: true,
            emphasis: [LabelEmphasis::default(); 3],
            values: None,
        }
    }
}

impl PadView for PadVisuals {
    fn move_marker(&mut self, marker: MarkerId, point: [f64; 2]) {
        match marker {
            MarkerId::Crosshair => self.crosshair = point,
            MarkerId::Selection => self.selection = point,
        }
    }

    fn set_label_emphasis(&mut self, dimension: Dimension, value: f64) {
        self.emphasis[dimension.index()] = LabelEmphasis::for_value(value);
    }

    fn set_marker_visible(&mut self, marker: MarkerId, visible: bool) {
        if marker == MarkerId::Selection {
            self.selection_visible = visible;
        }
    }

    fn write_values(&mut self, values: [f64; 3]) {
        self.values = Some(values);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TernaryPadPanel
// ─────────────────────────────────────────────────────────────────────────────

/// The central widget: interaction state, visual state, controllers, chrome.
pub struct TernaryPadPanel {
    interaction: Interaction,
    visuals: PadVisuals,

    // ── Appearance / chrome ──────────────────────────────────────────────
    pub labels: [String; 3],
    pub crosshair_opacity: f32,
    pub selection_opacity: f32,
    pub features: FeatureFlags,
    pub layout: ResponsiveLayout,
    pub overlays: Option<PadOverlay>,

    // ── Controllers ──────────────────────────────────────────────────────
    pub(crate) pad_ctrl: Option<PadActionController>,
    pub(crate) event_ctrl: Option<EventController>,

    last_size: Vec2,
    panel_id: u64,
}

impl Default for TernaryPadPanel {
    fn default() -> Self {
        Self::new(Triangle::default())
    }
}

impl TernaryPadPanel {
    pub fn new(triangle: Triangle) -> Self {
        let visuals = PadVisuals::new(&triangle);
        Self {
            interaction: Interaction::new(triangle),
            visuals,
            labels: TernaryPadConfig::default().labels,
            crosshair_opacity: 0.3,
            selection_opacity: 1.0,
            features: FeatureFlags::default(),
            layout: ResponsiveLayout::default(),
            overlays: None,
            pad_ctrl: None,
            event_ctrl: None,
            // Large initial value so nothing is suppressed on the first frame.
            last_size: Vec2::new(10_000.0, 10_000.0),
            panel_id: PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Build a panel from a configuration (labels, sizes, features).
    pub fn from_config(cfg: &TernaryPadConfig) -> Self {
        let mut panel = Self::new(Triangle::new(cfg.element_size));
        panel.labels = cfg.labels.clone();
        panel.crosshair_opacity = cfg.crosshair_opacity;
        panel.selection_opacity = cfg.selection_opacity;
        panel.features = cfg.features.clone();
        panel.layout = cfg.layout.clone();
        panel.pad_ctrl = cfg.controllers.pad_action.clone();
        panel.event_ctrl = cfg.controllers.event.clone();
        panel
    }

    /// Attach controllers for embedded usage.
    pub fn set_controllers(
        &mut self,
        pad_ctrl: Option<PadActionController>,
        event_ctrl: Option<EventController>,
    ) {
        self.pad_ctrl = pad_ctrl;
        self.event_ctrl = event_ctrl;
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        self.interaction.triangle()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.interaction.phase()
    }

    /// Current output-field values, if any were written.
    #[inline]
    pub fn values(&self) -> Option<[f64; 3]> {
        self.visuals.values
    }

    /// Feed one input event through the widget, as the pointer handling does.
    ///
    /// Public so hosts and tests can drive the widget without a live pointer.
    pub fn handle_input(&mut self, input: PadInput) {
        self.handle_input_at(input, None);
    }

    /// Replace the triangle (e.g. after loading settings with a different
    /// `element_size`). Resets the interaction and parks the markers.
    pub fn set_triangle(&mut self, triangle: Triangle) {
        self.visuals = PadVisuals::new(&triangle);
        self.interaction = Interaction::new(triangle);
    }

    /// Clear any selection and park both markers back at the centroid.
    pub fn reset(&mut self) {
        let effects = self.interaction.clear_selection();
        view::dispatch(&effects, &mut self.visuals);
        let centroid = self.triangle().centroid();
        self.visuals.crosshair = centroid;
        self.visuals.selection = centroid;
        self.visuals.emphasis = [LabelEmphasis::default(); 3];
        self.visuals.values = None;
        self.emit(
            PadEvent::new(EventKind::SELECTION_CLEARED | EventKind::MARKER_HIDDEN),
            |_| {},
        );
        log::info!("[pad] selection cleared");
    }

    /// Snapshot of the current settings, for persistence.
    pub fn settings(&self) -> PadSettings {
        PadSettings {
            element_size: self.triangle().element_size(),
            labels: self.labels.clone(),
            crosshair_opacity: self.crosshair_opacity,
            selection_opacity: self.selection_opacity,
            features: self.features.clone(),
            color_scheme: None,
        }
    }

    /// Apply loaded settings. A changed `element_size` rebuilds the triangle
    /// and resets the interaction.
    pub fn apply_settings(&mut self, settings: &PadSettings) {
        if (settings.element_size - self.triangle().element_size()).abs() > f64::EPSILON {
            self.set_triangle(Triangle::new(settings.element_size));
        }
        self.labels = settings.labels.clone();
        self.crosshair_opacity = settings.crosshair_opacity;
        self.selection_opacity = settings.selection_opacity;
        self.features = settings.features.clone();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Per-frame update
    // ─────────────────────────────────────────────────────────────────────

    /// Render the widget and process input and controller requests.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        self.process_pad_controller(ui.ctx());
        self.handle_screenshot_result(ui.ctx());

        let avail = ui.available_size();
        if self.features.top_bar && avail.y >= self.layout.min_height_for_top_bar {
            self.render_top_bar(ui);
            ui.separator();
        }

        let show_readout = self.features.value_readout
            && ui.available_width() >= self.layout.min_width_for_readout;
        let readout_height = if show_readout { 24.0 } else { 0.0 };

        let side = (ui.available_width())
            .min(ui.available_height() - readout_height)
            .max(16.0);
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(side), Sense::click());
        let transform = PadTransform::new(response.rect, self.triangle().element_size());

        self.detect_resize(response.rect.size());
        self.handle_pointer(ui, &response, &transform);
        self.draw(&painter, &transform);

        if let Some(overlay) = &mut self.overlays {
            overlay(&painter, &transform, self.interaction.triangle());
        }

        if show_readout {
            self.render_readout(ui);
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
                .on_hover_text("Clear the selection and park the markers")
                .clicked()
            {
                self.reset();
            }

            ui.separator();

            if ui
                .button(format!("{CAMERA} Save PNG"))
                .on_hover_text("Take a screenshot of the entire window")
                .clicked()
            {
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }

            ui.separator();

            if ui
                .button(FLOPPY_DISK.to_string())
                .on_hover_text("Save pad settings (JSON or YAML by extension)")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("ternpad_settings.json")
                    .add_filter("Settings", &["json", "yaml", "yml"])
                    .save_file()
                {
                    if let Err(e) = self.settings().save_to_path(&path) {
                        eprintln!("Failed to save settings: {e}");
                    }
                }
            }
            if ui
                .button(FOLDER_OPEN.to_string())
                .on_hover_text("Load pad settings")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Settings", &["json", "yaml", "yml"])
                    .pick_file()
                {
                    match PadSettings::load_from_path(&path) {
                        Ok(settings) => self.apply_settings(&settings),
                        Err(e) => eprintln!("Failed to load settings: {e}"),
                    }
                }
            }
        });
    }

    fn render_readout(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for dim in Dimension::ALL {
                let text = match self.visuals.values {
                    Some(values) => format!("{:.4}", values[dim.index()]),
                    None => "–".to_string(),
                };
                ui.label(format!("{}:", self.labels[dim.index()]));
                ui.monospace(text);
                if dim != Dimension::Third {
                    ui.separator();
                }
            }
        });
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    fn handle_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        transform: &PadTransform,
    ) {
        let touch_active = ui.input(|i| i.any_touches());

        let (input, screen_pos) = if response.clicked() {
            match response.interact_pointer_pos() {
                Some(pos) => (Some(PadInput::Click(transform.to_pad(pos))), Some(pos)),
                None => (None, None),
            }
        } else {
            match response.hover_pos() {
                Some(pos) => {
                    let p = transform.to_pad(pos);
                    let input = if touch_active {
                        PadInput::TouchMove(p)
                    } else {
                        PadInput::Move(p)
                    };
                    (Some(input), Some(pos))
                }
                None => (None, None),
            }
        };

        if let Some(input) = input {
            self.handle_input_at(input, screen_pos);
        }
    }

    /// Run one input through the machine, project the effects, publish
    /// snapshots, and emit events.
    fn handle_input_at(&mut self, input: PadInput, screen_pos: Option<Pos2>) {
        let phase_before = self.interaction.phase();
        let effects = self.interaction.handle(input);
        if effects.is_empty() && self.interaction.phase() == phase_before {
            return;
        }
        view::dispatch(&effects, &mut self.visuals);

        let phase = self.interaction.phase();
        if matches!(input, PadInput::Click(_)) && phase == Phase::Confirmed {
            log::info!(
                "[click] selection confirmed at ({:.1}, {:.1})",
                input.point()[0],
                input.point()[1]
            );
        }

        self.publish_values(&effects, input.point());
        self.emit_interaction_event(input, screen_pos, phase_before, &effects);
    }

    fn publish_values(&mut self, effects: &[Effect], point: [f64; 2]) {
        let Some(values) = effects.iter().find_map(|e| match e {
            Effect::WriteValues(v) => Some(*v),
            _ => None,
        }) else {
            return;
        };
        if let Some(ctrl) = &self.pad_ctrl {
            let snapshot = ValuesSnapshot {
                point,
                values,
                confirmed: self.interaction.phase() == Phase::Confirmed,
            };
            let mut inner = ctrl.inner.lock().unwrap();
            inner.last_values = Some(snapshot);
            inner.values_listeners.retain(|s| s.send(snapshot).is_ok());
        }
    }

    fn emit_interaction_event(
        &mut self,
        input: PadInput,
        screen_pos: Option<Pos2>,
        phase_before: Phase,
        effects: &[Effect],
    ) {
        let phase = self.interaction.phase();
        let mut kinds = EventKind(0);
        if matches!(input, PadInput::Click(_)) {
            kinds |= EventKind::CLICK;
        }
        if phase_before == Phase::Idle && phase != Phase::Idle {
            kinds |= EventKind::ENTER;
        }
        let mut values_meta = None;
        let mut marker_meta = None;
        for effect in effects {
            match effect {
                Effect::MoveCrosshair(_) => kinds |= EventKind::FEEDBACK,
                Effect::MoveSelection(p) => {
                    kinds |= EventKind::SELECTION_PLACED;
                    marker_meta = Some(MarkerMeta {
                        marker: MarkerId::Selection,
                        visible: None,
                        point: Some((*p).into()),
                    });
                }
                Effect::WriteValues(values) => {
                    kinds |= EventKind::VALUES_WRITTEN;
                    values_meta = Some(ValuesMeta {
                        values: *values,
                        point: Some(input.point().into()),
                        confirmed: phase == Phase::Confirmed,
                    });
                }
                Effect::SetSelectionVisible(v) => {
                    kinds |= if *v {
                        EventKind::MARKER_SHOWN
                    } else {
                        EventKind::MARKER_HIDDEN
                    };
                    if let Some(meta) = &mut marker_meta {
                        meta.visible = Some(*v);
                    } else {
                        marker_meta = Some(MarkerMeta {
                            marker: MarkerId::Selection,
                            visible: Some(*v),
                            point: None,
                        });
                    }
                }
                Effect::Emphasize(_) => {}
            }
        }
        if phase == Phase::Confirmed && phase_before != Phase::Confirmed {
            kinds |= EventKind::SELECTION_CONFIRMED;
        }
        if phase_before == Phase::Confirmed && phase == Phase::Hovering {
            kinds |= EventKind::SELECTION_RECONSIDERED;
        }
        if kinds.is_empty() {
            return;
        }

        self.emit(PadEvent::new(kinds), |evt| {
            evt.pointer = Some(PointerMeta {
                screen_pos: screen_pos.map(|p| ScreenPos { x: p.x, y: p.y }),
                pad_pos: Some(input.point().into()),
                phase: Some(phase),
            });
            evt.values = values_meta;
            evt.marker = marker_meta;
        });
    }

    fn detect_resize(&mut self, size: Vec2) {
        if (size - self.last_size).length_sq() > 0.25 {
            let prev = self.last_size;
            self.last_size = size;
            // Suppress the artificial "resize" on the very first frame.
            if prev.x < 9_999.0 {
                self.emit(PadEvent::new(EventKind::RESIZE), |evt| {
                    evt.resize = Some(ResizeMeta {
                        width: size.x,
                        height: size.y,
                    });
                });
            }
        }
    }

    fn emit(&self, mut event: PadEvent, fill: impl FnOnce(&mut PadEvent)) {
        if let Some(ctrl) = &self.event_ctrl {
            fill(&mut event);
            ctrl.emit(event);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Controller requests & screenshots
    // ─────────────────────────────────────────────────────────────────────

    fn process_pad_controller(&mut self, ctx: &egui::Context) {
        let Some(ctrl) = self.pad_ctrl.clone() else {
            return;
        };
        let (set_selection, clear, shot, shot_to) = {
            let mut inner = ctrl.inner.lock().unwrap();
            (
                inner.request_set_selection.take(),
                std::mem::take(&mut inner.request_clear_selection),
                std::mem::take(&mut inner.request_screenshot),
                inner.request_screenshot_to.take(),
            )
        };

        if let Some(point) = set_selection {
            let effects = self.interaction.set_selection(point);
            if effects.is_empty() {
                log::warn!("[pad] rejected selection outside the triangle: {point:?}");
            } else {
                view::dispatch(&effects, &mut self.visuals);
                self.publish_values(&effects, point);
                self.emit(
                    PadEvent::new(
                        EventKind::SELECTION_PLACED
                            | EventKind::SELECTION_CONFIRMED
                            | EventKind::VALUES_WRITTEN
                            | EventKind::MARKER_SHOWN,
                    ),
                    |evt| {
                        evt.pointer = Some(PointerMeta {
                            screen_pos: None,
                            pad_pos: Some(point.into()),
                            phase: Some(Phase::Confirmed),
                        });
                    },
                );
            }
        }
        if clear {
            self.reset();
        }
        if shot {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if let Some(path) = shot_to {
            std::env::set_var(SCREENSHOT_ENV, path);
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
    }

    /// Handle a pending screenshot result and save it to a chosen path or the
    /// path recorded in the environment.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };

        let path = if let Ok(path_str) = std::env::var(SCREENSHOT_ENV) {
            std::env::remove_var(SCREENSHOT_ENV);
            Some(std::path::PathBuf::from(path_str))
        } else {
            let default_name =
                format!("ternpad_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
            rfd::FileDialog::new()
                .set_file_name(&default_name)
                .save_file()
        };
        let Some(path) = path else { return };

        let egui::ColorImage {
            size: [w, h],
            pixels,
            ..
        } = &*image_arc;
        let mut out = RgbaImage::new(*w as u32, *h as u32);
        for y in 0..*h {
            for x in 0..*w {
                let p = pixels[y * *w + x];
                out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
            }
        }
        if let Err(e) = out.save(&path) {
            eprintln!("Failed to save viewport screenshot: {e}");
        } else {
            log::info!("[pad] saved viewport screenshot to {:?}", path);
            self.emit(PadEvent::new(EventKind::SCREENSHOT), |_| {});
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────

    fn draw(&self, painter: &egui::Painter, transform: &PadTransform) {
        let ink = color_scheme::pad_ink();
        let triangle = self.interaction.triangle();

        // Polygon.
        let corners: Vec<Pos2> = triangle
            .corners()
            .iter()
            .map(|c| transform.to_screen(*c))
            .collect();
        painter.add(PathShape::convex_polygon(
            corners.clone(),
            ink.fill,
            Stroke::new(transform.px(2.0), ink.outline),
        ));

        // Corner dots.
        if self.features.corner_dots {
            for corner in &corners {
                painter.circle_filled(*corner, transform.px(5.0), ink.outline);
            }
        }

        // Corner labels.
        if self.features.corner_labels
            && transform.rect.width() >= self.layout.min_width_for_labels
        {
            self.draw_labels(painter, transform, triangle, ink.label);
        }

        // Markers: crosshair follows the pointer, selection persists.
        if self.features.crosshair {
            self.draw_marker(
                painter,
                transform,
                self.visuals.crosshair,
                ink.marker.gamma_multiply(self.crosshair_opacity),
            );
        }
        if self.visuals.selection_visible {
            self.draw_marker(
                painter,
                transform,
                self.visuals.selection,
                ink.marker.gamma_multiply(self.selection_opacity),
            );
        }
    }

    fn draw_labels(
        &self,
        painter: &egui::Painter,
        transform: &PadTransform,
        triangle: &Triangle,
        label_color: Color32,
    ) {
        let padding = triangle.padding();
        // Anchors mirror the original layout: the top label sits above its
        // corner, the bottom labels hang below theirs, pulled inwards.
        let anchors = [
            (
                [0.0, -padding],
                Align2::CENTER_BOTTOM,
                triangle.corner(Dimension::First),
            ),
            (
                [2.0 * padding, padding],
                Align2::RIGHT_TOP,
                triangle.corner(Dimension::Second),
            ),
            (
                [-2.0 * padding, padding],
                Align2::LEFT_TOP,
                triangle.corner(Dimension::Third),
            ),
        ];
        for (dim, (offset, align, corner)) in Dimension::ALL.into_iter().zip(anchors) {
            let emphasis = if self.features.label_emphasis {
                self.visuals.emphasis[dim.index()]
            } else {
                LabelEmphasis::default()
            };
            let pos = transform.to_screen([corner[0] + offset[0], corner[1] + offset[1]]);
            // egui has no variable font weights; the 100–900 weight maps onto
            // text opacity instead.
            let strength = 0.45 + 0.55 * ((emphasis.font_weight - 100.0) / 800.0) as f32;
            painter.text(
                pos,
                align,
                &self.labels[dim.index()],
                FontId::proportional(transform.px(emphasis.font_size)),
                label_color.gamma_multiply(strength),
            );
        }
    }

    /// Circle-plus-crosslines glyph shared by both markers.
    fn draw_marker(
        &self,
        painter: &egui::Painter,
        transform: &PadTransform,
        point: [f64; 2],
        color: Color32,
    ) {
        let center = transform.to_screen(point);
        let arm = transform.px(25.0);
        let stroke = Stroke::new(transform.px(2.0), color);
        painter.circle_filled(center, transform.px(5.0), color);
        painter.line_segment(
            [center - Vec2::new(arm, 0.0), center + Vec2::new(arm, 0.0)],
            stroke,
        );
        painter.line_segment(
            [center - Vec2::new(0.0, arm), center + Vec2::new(0.0, arm)],
            stroke,
        );
    }

    /// Unique ID for this panel instance, usable to namespace egui IDs.
    #[inline]
    pub fn panel_id(&self) -> u64 {
        self.panel_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_round_trips_pad_coordinates() {
        let rect = egui::Rect::from_min_size(Pos2::new(40.0, 60.0), Vec2::splat(300.0));
        let transform = PadTransform::new(rect, 600.0);
        assert_eq!(transform.scale(), 0.5);

        let screen = transform.to_screen([300.0, 330.0]);
        assert_eq!(screen, Pos2::new(40.0 + 150.0, 60.0 + 165.0));
        let back = transform.to_pad(screen);
        assert!((back[0] - 300.0).abs() < 1e-4);
        assert!((back[1] - 330.0).abs() < 1e-4);
    }

    #[test]
    fn panel_confirms_via_public_input_path() {
        let mut panel = TernaryPadPanel::default();
        let centroid = panel.triangle().centroid();
        panel.handle_input(PadInput::Click(centroid));
        assert_eq!(panel.phase(), Phase::Confirmed);
        let values = panel.values().expect("values written");
        assert_eq!(values, panel.triangle().values(centroid));
    }

    #[test]
    fn panel_publishes_value_snapshots_to_controller() {
        let ctrl = PadActionController::new();
        let rx = ctrl.subscribe_values();
        let mut panel = TernaryPadPanel::default();
        panel.set_controllers(Some(ctrl.clone()), None);

        let centroid = panel.triangle().centroid();
        panel.handle_input(PadInput::Click(centroid));

        let snapshot = rx.try_recv().expect("snapshot published");
        assert_eq!(snapshot.point, centroid);
        assert!(snapshot.confirmed);
        assert_eq!(ctrl.last_values(), Some(snapshot));
    }

    #[test]
    fn panel_emits_interaction_events() {
        let events = EventController::new();
        let rx = events.subscribe_all();
        let mut panel = TernaryPadPanel::default();
        panel.set_controllers(None, Some(events));

        let centroid = panel.triangle().centroid();
        panel.handle_input(PadInput::Move(centroid));
        let enter = rx.try_recv().expect("enter event");
        assert!(enter.kinds.contains(EventKind::ENTER));
        assert!(enter.kinds.contains(EventKind::MARKER_HIDDEN));

        panel.handle_input(PadInput::Click(centroid));
        let confirm = rx.try_recv().expect("confirm event");
        assert!(confirm.kinds.contains(EventKind::CLICK));
        assert!(confirm.kinds.contains(EventKind::SELECTION_CONFIRMED));
        assert!(confirm.kinds.contains(EventKind::VALUES_WRITTEN));
        let values = confirm.values.expect("values meta");
        assert!(values.confirmed);

        // Clicks outside never emit.
        panel.handle_input(PadInput::Click([0.0, 0.0]));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reset_parks_markers_and_clears_values() {
        let mut panel = TernaryPadPanel::default();
        let centroid = panel.triangle().centroid();
        panel.handle_input(PadInput::Click([centroid[0] + 10.0, centroid[1]]));
        assert!(panel.values().is_some());

        panel.reset();
        assert_eq!(panel.phase(), Phase::Idle);
        assert_eq!(panel.values(), None);
        assert_eq!(panel.visuals.crosshair, centroid);
        assert_eq!(panel.visuals.selection, centroid);
        assert!(!panel.visuals.selection_visible);
    }

    #[test]
    fn settings_round_trip_through_panel() {
        let mut panel = TernaryPadPanel::default();
        panel.labels = ["A".into(), "B".into(), "C".into()];
        panel.crosshair_opacity = 0.5;
        let settings = panel.settings();

        let mut other = TernaryPadPanel::default();
        other.apply_settings(&settings);
        assert_eq!(other.labels, panel.labels);
        assert_eq!(other.crosshair_opacity, 0.5);
        assert_eq!(
            other.triangle().element_size(),
            panel.triangle().element_size()
        );
    }
}
