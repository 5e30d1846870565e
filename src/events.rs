//! Generic event system for the ternary pad.
//!
//! Callers can subscribe to a set of UI and interaction events via
//! [`EventController`]. Each event carries a set of [`EventKind`] flags
//! (bitflags-style) so that a single occurrence can match multiple
//! categories (e.g. a confirming click is *also* a `CLICK` event).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::interaction::Phase;
use crate::view::MarkerId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
///
/// A single [`PadEvent`] may have several bits set. For example a click that
/// confirms a selection has `CLICK`, `SELECTION_PLACED`, `VALUES_WRITTEN`
/// and `SELECTION_CONFIRMED` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    // ── Pointer / interaction ────────────────────────────────────────────
    /// A primary click that landed inside the triangle.
    pub const CLICK: Self = Self(1 << 0);
    /// The pointer entered the triangle for the first time.
    pub const ENTER: Self = Self(1 << 1);
    /// Crosshair moved and labels were re-emphasized.
    pub const FEEDBACK: Self = Self(1 << 2);

    // ── Selection lifecycle ─────────────────────────────────────────────
    /// The selection marker was moved to a new point.
    pub const SELECTION_PLACED: Self = Self(1 << 3);
    /// A placed point was confirmed by a click.
    pub const SELECTION_CONFIRMED: Self = Self(1 << 4);
    /// A confirmed point was reopened for reconsideration.
    pub const SELECTION_RECONSIDERED: Self = Self(1 << 5);
    /// The selection was cleared programmatically.
    pub const SELECTION_CLEARED: Self = Self(1 << 6);

    // ── Output fields ───────────────────────────────────────────────────
    /// The three dimension values were written to the output fields.
    pub const VALUES_WRITTEN: Self = Self(1 << 7);

    // ── Markers ─────────────────────────────────────────────────────────
    /// The selection marker became visible.
    pub const MARKER_SHOWN: Self = Self(1 << 8);
    /// The selection marker was hidden.
    pub const MARKER_HIDDEN: Self = Self(1 << 9);

    // ── Widget chrome ───────────────────────────────────────────────────
    /// The pad widget was resized.
    pub const RESIZE: Self = Self(1 << 10);
    /// A screenshot was taken.
    pub const SCREENSHOT: Self = Self(1 << 11);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::Not for EventKind {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// String conversions
// ─────────────────────────────────────────────────────────────────────────────

const KIND_NAMES: &[(EventKind, &str)] = &[
    (EventKind::CLICK, "CLICK"),
    (EventKind::ENTER, "ENTER"),
    (EventKind::FEEDBACK, "FEEDBACK"),
    (EventKind::SELECTION_PLACED, "SELECTION_PLACED"),
    (EventKind::SELECTION_CONFIRMED, "SELECTION_CONFIRMED"),
    (EventKind::SELECTION_RECONSIDERED, "SELECTION_RECONSIDERED"),
    (EventKind::SELECTION_CLEARED, "SELECTION_CLEARED"),
    (EventKind::VALUES_WRITTEN, "VALUES_WRITTEN"),
    (EventKind::MARKER_SHOWN, "MARKER_SHOWN"),
    (EventKind::MARKER_HIDDEN, "MARKER_HIDDEN"),
    (EventKind::RESIZE, "RESIZE"),
    (EventKind::SCREENSHOT, "SCREENSHOT"),
];

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let mut names = Vec::new();
        let mut known_bits: u32 = 0;
        for (kind, name) in KIND_NAMES {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        // Bits that weren't covered by the known list.
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata – per-event-type payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Screen (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

/// Pad-space coordinates (logical `element_size × element_size` units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadPos {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for PadPos {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// Metadata attached to pointer events.
#[derive(Debug, Clone)]
pub struct PointerMeta {
    /// Screen coordinates of the pointer (pixels within the window).
    pub screen_pos: Option<ScreenPos>,
    /// Pad-space coordinates of the pointer.
    pub pad_pos: Option<PadPos>,
    /// Interaction phase after the event was processed.
    pub phase: Option<Phase>,
}

/// Metadata for value-write events.
#[derive(Debug, Clone)]
pub struct ValuesMeta {
    /// The three dimension values, in dimension order.
    pub values: [f64; 3],
    /// Pad-space point the values were derived from.
    pub point: Option<PadPos>,
    /// Whether the point is confirmed (as opposed to tracked or touch-placed).
    pub confirmed: bool,
}

/// Metadata for marker events.
#[derive(Debug, Clone)]
pub struct MarkerMeta {
    /// Which marker changed.
    pub marker: MarkerId,
    /// New visibility (for show/hide events).
    pub visible: Option<bool>,
    /// New position (for move events).
    pub point: Option<PadPos>,
}

/// Metadata for resize events.
#[derive(Debug, Clone, Copy)]
pub struct ResizeMeta {
    /// New size in logical pixels.
    pub width: f32,
    pub height: f32,
}

// ─────────────────────────────────────────────────────────────────────────────
// PadEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// A rich event emitted by the pad UI.
///
/// `kinds` is a bitflag set of [`EventKind`] categories. The various
/// `Option<…Meta>` fields carry metadata relevant to the kinds that are set.
#[derive(Debug, Clone)]
pub struct PadEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,

    // ── Optional metadata ────────────────────────────────────────────────
    pub pointer: Option<PointerMeta>,
    pub values: Option<ValuesMeta>,
    pub marker: Option<MarkerMeta>,
    pub resize: Option<ResizeMeta>,
}

impl PadEvent {
    /// Create a new event with the given kinds; the timestamp is set on emit.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            pointer: None,
            values: None,
            marker: None,
            resize: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
///
/// The filter is an OR-mask: an event is delivered when
/// `event.kinds.intersects(filter.mask)`.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &PadEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) struct Subscriber {
    filter: EventFilter,
    sender: Sender<PadEvent>,
}

/// Controller that collects and distributes UI events to subscribers.
///
/// Attach it to [`TernaryPadConfig`](crate::config::TernaryPadConfig) before
/// launching the UI. Then call [`subscribe`](Self::subscribe) (with an
/// optional filter) to receive events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    pub(crate) inner: Arc<Mutex<EventCtrlInner>>,
}

pub(crate) struct EventCtrlInner {
    pub(crate) subscribers: Vec<Subscriber>,
    pub(crate) start_instant: std::time::Instant,
}

impl EventController {
    /// Create a new event controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    ///
    /// Returns a receiver that will receive [`PadEvent`]s whenever the UI
    /// emits an event whose `kinds` intersect with the filter mask.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<PadEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<PadEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all subscribers whose filter matches.
    ///
    /// This is called internally by the pad UI. It is public so that custom
    /// frontends or embedding code can inject synthetic events. Subscribers
    /// whose receiver was dropped are pruned on the fly.
    pub fn emit(&self, mut event: PadEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let click = EventKind::CLICK;
        let feedback = EventKind::FEEDBACK;
        let combined = click | feedback;
        assert!(combined.contains(click));
        assert!(combined.contains(feedback));
        assert!(combined.intersects(click));
        assert!(!EventKind::RESIZE.intersects(click));
    }

    #[test]
    fn event_kind_all_matches_everything() {
        assert!(EventKind::ALL.contains(EventKind::CLICK));
        assert!(EventKind::ALL.contains(EventKind::SELECTION_CONFIRMED));
        assert!(EventKind::ALL.contains(EventKind::MARKER_HIDDEN));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::CLICK | EventKind::SELECTION_CONFIRMED);
        let evt = PadEvent::new(EventKind::CLICK);
        assert!(filter.matches(&evt));

        let evt2 = PadEvent::new(EventKind::RESIZE);
        assert!(!filter.matches(&evt2));

        let evt3 = PadEvent::new(EventKind::CLICK | EventKind::VALUES_WRITTEN);
        assert!(filter.matches(&evt3));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_clicks = ctrl.subscribe(EventFilter::only(EventKind::CLICK));
        let rx_resize = ctrl.subscribe(EventFilter::only(EventKind::RESIZE));

        ctrl.emit(PadEvent::new(EventKind::CLICK));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_clicks.try_recv().is_ok());
        assert!(rx_resize.try_recv().is_err());
    }

    #[test]
    fn event_controller_combined_kinds() {
        let ctrl = EventController::new();
        let rx_click = ctrl.subscribe(EventFilter::only(EventKind::CLICK));
        let rx_values = ctrl.subscribe(EventFilter::only(EventKind::VALUES_WRITTEN));

        ctrl.emit(PadEvent::new(EventKind::CLICK | EventKind::VALUES_WRITTEN));

        assert!(rx_click.try_recv().is_ok());
        assert!(rx_values.try_recv().is_ok());
    }

    #[test]
    fn event_controller_timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();

        std::thread::sleep(std::time::Duration::from_millis(10));
        ctrl.emit(PadEvent::new(EventKind::CLICK));

        let evt = rx.try_recv().unwrap();
        assert!(evt.timestamp > 0.0);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::CLICK), "CLICK");
        assert_eq!(format!("{}", EventKind::SELECTION_PLACED), "SELECTION_PLACED");
        let combo = EventKind::CLICK | EventKind::FEEDBACK;
        assert_eq!(format!("{}", combo), "CLICK|FEEDBACK");
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        let unknown = EventKind(1 << 31);
        assert!(format!("{}", unknown).starts_with("0x"));
    }

    #[test]
    fn event_kinds_do_not_overlap() {
        for (i, (a, _)) in KIND_NAMES.iter().enumerate() {
            for (j, (b, _)) in KIND_NAMES.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.intersects(*b),
                        "EventKind bits {} and {} overlap: {:b} & {:b}",
                        i,
                        j,
                        a.0,
                        b.0
                    );
                }
            }
        }
    }

    #[test]
    fn dropped_receiver_is_cleaned_up() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();

        drop(rx1);

        ctrl.emit(PadEvent::new(EventKind::CLICK));
        assert!(rx2.try_recv().is_ok());

        // Emit again – the dead subscriber should have been pruned.
        ctrl.emit(PadEvent::new(EventKind::RESIZE));
        assert!(rx2.try_recv().is_ok());
        assert_eq!(ctrl.inner.lock().unwrap().subscribers.len(), 1);
    }

    #[test]
    fn pad_event_carries_metadata() {
        let mut evt = PadEvent::new(EventKind::CLICK | EventKind::VALUES_WRITTEN);
        evt.pointer = Some(PointerMeta {
            screen_pos: Some(ScreenPos { x: 100.0, y: 200.0 }),
            pad_pos: Some(PadPos { x: 300.0, y: 330.0 }),
            phase: Some(crate::data::interaction::Phase::Confirmed),
        });
        evt.values = Some(ValuesMeta {
            values: [0.6, 0.6, 0.6],
            point: Some([300.0, 330.0].into()),
            confirmed: true,
        });

        assert!(evt.kinds.contains(EventKind::CLICK));
        assert!(evt.pointer.is_some());
        assert_eq!(evt.values.as_ref().unwrap().values[0], 0.6);
        assert_eq!(evt.pointer.as_ref().unwrap().pad_pos.unwrap().x, 300.0);
    }
}
