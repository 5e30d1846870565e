//! Standalone application wrapper for the ternary pad.
//!
//! [`TernaryPadApp`] wraps a [`TernaryPadPanel`] and implements
//! [`eframe::App`] so the pad can run as a native window. It also holds the
//! window controller for the standalone case and owns the logic that applies
//! controller requests against the panel each frame.

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::TernaryPadConfig;
use crate::controllers::{WindowController, WindowInfo};
use crate::panel::TernaryPadPanel;

/// Standalone pad application that implements [`eframe::App`].
pub struct TernaryPadApp {
    /// The inner panel widget that owns all interaction and UI state.
    pub panel: TernaryPadPanel,

    /// Controls the host window (size, position).
    pub window_ctrl: Option<WindowController>,

    /// Optional heading text shown at the top of the window.
    pub headline: Option<String>,
    /// Optional sub-heading text shown below the headline.
    pub subheadline: Option<String>,

    /// Color scheme to apply to the egui context. Applied once on the first
    /// frame, after the context exists.
    pub color_scheme: Option<ColorScheme>,
    color_scheme_applied: bool,
}

impl TernaryPadApp {
    /// Create an app from a configuration, wiring the controllers it carries.
    pub fn from_config(cfg: &mut TernaryPadConfig) -> Self {
        let mut panel = TernaryPadPanel::from_config(cfg);
        panel.overlays = cfg.overlays.take();
        Self {
            panel,
            window_ctrl: cfg.controllers.window.take(),
            headline: cfg.headline.clone(),
            subheadline: cfg.subheadline.clone(),
            color_scheme: Some(cfg.color_scheme.clone()),
            color_scheme_applied: false,
        }
    }

    /// Process window-controller requests and publish state snapshots.
    ///
    /// Called once per frame *after* the panel has rendered.
    fn apply_window_controller(&mut self, ctx: &egui::Context) {
        let Some(ctrl) = &self.window_ctrl else {
            return;
        };
        let (req_size, req_pos) = {
            let mut inner = ctrl.inner.lock().unwrap();
            (inner.request_set_size.take(), inner.request_set_pos.take())
        };
        if let Some([w, h]) = req_size {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::Vec2::new(w, h)));
        }
        if let Some([x, y]) = req_pos {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::Pos2::new(x, y)));
        }

        let rect = ctx.input(|i| i.content_rect());
        let size = [rect.width(), rect.height()];
        let pos = [rect.left(), rect.top()];
        let info = WindowInfo {
            current_size: Some(size),
            current_pos: Some(pos),
            requested_size: req_size,
            requested_pos: req_pos,
        };
        let mut inner = ctrl.inner.lock().unwrap();
        inner.current_size = Some(size);
        inner.current_pos = Some(pos);
        inner.listeners.retain(|s| s.send(info.clone()).is_ok());
    }
}

impl eframe::App for TernaryPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the color scheme once, on the first frame.
        if !self.color_scheme_applied {
            if let Some(scheme) = &self.color_scheme {
                scheme.apply(ctx);
            }
            self.color_scheme_applied = true;
        }

        // Optional headline banner at the top of the window.
        if self.headline.is_some() || self.subheadline.is_some() {
            egui::TopBottomPanel::top("ternpad_headline").show(ctx, |ui| {
                if let Some(h) = &self.headline {
                    ui.heading(h);
                }
                if let Some(sub) = &self.subheadline {
                    ui.label(sub);
                }
            });
        }

        // Main content area.
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.update(ui);
        });

        // Publish window state after the panel has updated.
        self.apply_window_controller(ctx);

        // Keep following the pointer smoothly (~60 fps).
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
