//! Controllers for interacting with the UI from external code.
//!
//! The controllers expose lightweight state and a subscription mechanism so
//! non-UI code can observe window/widget state and push simple requests
//! (like clearing the current selection or saving a screenshot).

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Current window information (physical pixels).
#[derive(Debug, Clone)]
pub struct WindowInfo {
    /// Last observed size of the entire window in physical pixels.
    pub current_size: Option<[f32; 2]>,
    /// Last observed window position in physical pixels.
    pub current_pos: Option<[f32; 2]>,
    /// Requested size (if any) set via controller. Whether it is applied
    /// depends on the backend/platform.
    pub requested_size: Option<[f32; 2]>,
    /// Requested window position (if any) in physical pixels.
    pub requested_pos: Option<[f32; 2]>,
}

/// Controller to get/set window info and subscribe to updates.
#[derive(Clone)]
pub struct WindowController {
    pub(crate) inner: Arc<Mutex<WindowCtrlInner>>, // crate-visible for UI
}

pub(crate) struct WindowCtrlInner {
    pub(crate) current_size: Option<[f32; 2]>,
    pub(crate) current_pos: Option<[f32; 2]>,
    pub(crate) request_set_size: Option<[f32; 2]>,
    pub(crate) request_set_pos: Option<[f32; 2]>,
    pub(crate) listeners: Vec<Sender<WindowInfo>>,
}

impl WindowController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(WindowCtrlInner {
                current_size: None,
                current_pos: None,
                request_set_size: None,
                request_set_pos: None,
                listeners: Vec::new(),
            })),
        }
    }

    /// Get the last observed window size in physical pixels (if known).
    pub fn get_current_size(&self) -> Option<[f32; 2]> {
        self.inner.lock().unwrap().current_size
    }

    /// Request a window size change (physical pixels). The request is recorded
    /// and broadcast to listeners; whether the runtime honors it depends on
    /// the backend.
    pub fn request_set_size(&self, size_px: [f32; 2]) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_set_size = Some(size_px);
    }

    /// Request a window position change (physical pixels).
    pub fn request_set_pos(&self, pos_px: [f32; 2]) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_set_pos = Some(pos_px);
    }

    /// Subscribe to window info updates. The returned receiver gets a
    /// [`WindowInfo`] whenever the UI publishes one.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<WindowInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}

impl Default for WindowController {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the three output fields, published whenever they are written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuesSnapshot {
    /// Pad-space point the values were derived from.
    pub point: [f64; 2],
    /// The three dimension values, in dimension order.
    pub values: [f64; 3],
    /// Whether the point is confirmed (click) rather than tracked or
    /// touch-placed.
    pub confirmed: bool,
}

/// Controller for high-level pad actions.
///
/// External code can place or clear the selection programmatically, trigger a
/// screenshot (equivalent to the UI's "Save PNG" button), and subscribe to
/// the output-field values. The screenshot request behaves like the UI: it
/// opens a save dialog unless an explicit path is given.
#[derive(Clone)]
pub struct PadActionController {
    pub(crate) inner: Arc<Mutex<PadActionInner>>, // crate-visible for UI
}

pub(crate) struct PadActionInner {
    pub(crate) request_set_selection: Option<[f64; 2]>,
    pub(crate) request_clear_selection: bool,
    pub(crate) request_screenshot: bool,
    pub(crate) request_screenshot_to: Option<std::path::PathBuf>,
    pub(crate) values_listeners: Vec<Sender<ValuesSnapshot>>,
    pub(crate) last_values: Option<ValuesSnapshot>,
}

impl PadActionController {
    /// Create a fresh pad action controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PadActionInner {
                request_set_selection: None,
                request_clear_selection: false,
                request_screenshot: false,
                request_screenshot_to: None,
                values_listeners: Vec::new(),
                last_values: None,
            })),
        }
    }

    /// Request placing and confirming a selection at a pad-space point.
    ///
    /// Points outside the triangle are rejected by the widget, exactly like
    /// pointer input.
    pub fn set_selection(&self, point: [f64; 2]) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_set_selection = Some(point);
    }

    /// Request clearing the current selection.
    pub fn clear_selection(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_clear_selection = true;
    }

    /// Request the UI to take a screenshot and prompt to save as PNG.
    pub fn request_save_png(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_screenshot = true;
    }

    /// Request saving a PNG screenshot to the exact provided path
    /// (non-interactive).
    pub fn request_save_png_to_path<P: Into<std::path::PathBuf>>(&self, path: P) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_screenshot_to = Some(path.into());
    }

    /// Subscribe to output-field snapshots.
    ///
    /// The returned receiver gets a [`ValuesSnapshot`] every time the widget
    /// writes the three dimension values.
    pub fn subscribe_values(&self) -> std::sync::mpsc::Receiver<ValuesSnapshot> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.values_listeners.push(tx);
        rx
    }

    /// Last published values snapshot, if any.
    pub fn last_values(&self) -> Option<ValuesSnapshot> {
        self.inner.lock().unwrap().last_values
    }
}

impl Default for PadActionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_selection_request_is_recorded() {
        let ctrl = PadActionController::new();
        ctrl.set_selection([300.0, 330.0]);
        let inner = ctrl.inner.lock().unwrap();
        assert_eq!(inner.request_set_selection, Some([300.0, 330.0]));
        assert!(!inner.request_clear_selection);
    }

    #[test]
    fn values_subscription_receives_published_snapshots() {
        let ctrl = PadActionController::new();
        let rx = ctrl.subscribe_values();

        let snapshot = ValuesSnapshot {
            point: [300.0, 330.0],
            values: [0.6, 0.6, 0.6],
            confirmed: true,
        };
        {
            let mut inner = ctrl.inner.lock().unwrap();
            inner.last_values = Some(snapshot);
            inner.values_listeners.retain(|s| s.send(snapshot).is_ok());
        }

        assert_eq!(rx.try_recv().unwrap(), snapshot);
        assert_eq!(ctrl.last_values(), Some(snapshot));
    }

    #[test]
    fn window_requests_are_recorded() {
        let ctrl = WindowController::new();
        ctrl.request_set_size([800.0, 600.0]);
        ctrl.request_set_pos([10.0, 20.0]);
        let inner = ctrl.inner.lock().unwrap();
        assert_eq!(inner.request_set_size, Some([800.0, 600.0]));
        assert_eq!(inner.request_set_pos, Some([10.0, 20.0]));
    }
}
