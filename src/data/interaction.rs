//! Pointer interaction for the ternary pad.
//!
//! The interaction is an explicit state machine: a single [`transition`]
//! function maps `(phase, input)` to a new phase plus a list of [`Effect`]s.
//! Effects are consumed by the view layer (see [`crate::view`]); the machine
//! itself never touches any rendering surface, so it can be driven and
//! asserted against in plain unit tests.
//!
//! Input that falls outside the triangle — including NaN or otherwise
//! non-finite coordinates — never produces a transition or an effect.

use super::geometry::Triangle;

/// Interaction phase of one pad instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The pointer has not yet entered the triangle.
    Idle,
    /// The pointer is inside and the user is still deciding.
    Hovering,
    /// A touch gesture placed a point that has not been confirmed yet.
    Placed,
    /// A click placed and confirmed a point; it persists until reconsidered.
    Confirmed,
}

/// One pointer input event, carrying pad-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadInput {
    /// Primary click (mouse or pen).
    Click([f64; 2]),
    /// Pointer motion.
    Move([f64; 2]),
    /// Touch-drag motion, which places without confirming.
    TouchMove([f64; 2]),
}

impl PadInput {
    /// The coordinate carried by the event.
    #[inline]
    pub fn point(self) -> [f64; 2] {
        match self {
            PadInput::Click(p) | PadInput::Move(p) | PadInput::TouchMove(p) => p,
        }
    }
}

/// Side effect requested by a transition, to be applied by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move the transient crosshair marker to the point.
    MoveCrosshair([f64; 2]),
    /// Re-weight the three corner labels with fresh dimension values.
    Emphasize([f64; 3]),
    /// Move the persistent selection marker to the point.
    MoveSelection([f64; 2]),
    /// Write the three dimension values to the output fields.
    WriteValues([f64; 3]),
    /// Show or hide the selection marker.
    SetSelectionVisible(bool),
}

/// Crosshair motion plus label emphasis: emitted on every accepted pointer
/// position.
fn feedback(triangle: &Triangle, point: [f64; 2]) -> [Effect; 2] {
    [
        Effect::MoveCrosshair(point),
        Effect::Emphasize(triangle.values(point)),
    ]
}

/// Output-field write plus selection-marker motion.
fn place(triangle: &Triangle, point: [f64; 2]) -> [Effect; 2] {
    [
        Effect::WriteValues(triangle.values(point)),
        Effect::MoveSelection(point),
    ]
}

/// Advance the state machine by one input event.
///
/// Returns the next phase and the effects to apply, in order. A no-op is
/// represented by the unchanged phase and an empty effect list.
pub fn transition(triangle: &Triangle, phase: Phase, input: PadInput) -> (Phase, Vec<Effect>) {
    if !triangle.is_inside(input.point()) {
        return (phase, Vec::new());
    }
    let mut effects = Vec::new();
    let next = match (phase, input) {
        // A click inside while undecided confirms the point. Pointer-down
        // inside the triangle implies the pointer has entered, so the Idle
        // case confirms directly as well.
        (Phase::Idle | Phase::Hovering, PadInput::Click(p)) => {
            effects.extend(feedback(triangle, p));
            effects.extend(place(triangle, p));
            effects.push(Effect::SetSelectionVisible(true));
            Phase::Confirmed
        }
        // Re-click while confirmed reopens the decision.
        (Phase::Confirmed, PadInput::Click(p)) => {
            effects.extend(feedback(triangle, p));
            effects.push(Effect::SetSelectionVisible(false));
            Phase::Hovering
        }
        // A touch-placed point ignores further clicks until motion resumes.
        (Phase::Placed, PadInput::Click(_)) => Phase::Placed,

        (Phase::Idle, PadInput::Move(_)) => {
            effects.push(Effect::SetSelectionVisible(false));
            Phase::Hovering
        }
        (Phase::Hovering, PadInput::Move(p)) => {
            effects.extend(feedback(triangle, p));
            effects.extend(place(triangle, p));
            Phase::Hovering
        }
        // Motion after a touch placement reopens the decision.
        (Phase::Placed, PadInput::Move(_)) => {
            effects.push(Effect::SetSelectionVisible(false));
            Phase::Hovering
        }
        // A confirmed point is immune to plain motion.
        (Phase::Confirmed, PadInput::Move(_)) => Phase::Confirmed,

        (Phase::Idle, PadInput::TouchMove(_)) => Phase::Hovering,
        (Phase::Hovering | Phase::Placed, PadInput::TouchMove(p)) => {
            effects.extend(feedback(triangle, p));
            effects.extend(place(triangle, p));
            Phase::Placed
        }
        // Touch guards carry no confirmation condition: dragging re-places
        // the confirmed point without demoting it.
        (Phase::Confirmed, PadInput::TouchMove(p)) => {
            effects.extend(feedback(triangle, p));
            effects.extend(place(triangle, p));
            Phase::Confirmed
        }
    };
    (next, effects)
}

/// Owned interaction state for one pad instance.
///
/// Wraps [`transition`] and tracks the last accepted point and the selection
/// marker visibility, so a host can interrogate the widget between events.
#[derive(Debug, Clone)]
pub struct Interaction {
    triangle: Triangle,
    phase: Phase,
    current_point: Option<[f64; 2]>,
    selection_visible: bool,
}

impl Interaction {
    pub fn new(triangle: Triangle) -> Self {
        // The selection marker starts visible at its initial position; the
        // first accepted pointer motion hides it.
        Self {
            triangle,
            phase: Phase::Idle,
            current_point: None,
            selection_visible: true,
        }
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last accepted pad-space coordinate, if any input was ever accepted.
    #[inline]
    pub fn current_point(&self) -> Option<[f64; 2]> {
        self.current_point
    }

    #[inline]
    pub fn selection_visible(&self) -> bool {
        self.selection_visible
    }

    /// Feed one input event through the state machine.
    ///
    /// Returns the effects the view layer must apply. The phase, current
    /// point, and marker-visibility bookkeeping are updated in place.
    pub fn handle(&mut self, input: PadInput) -> Vec<Effect> {
        let (next, effects) = transition(&self.triangle, self.phase, input);
        if !effects.is_empty() || next != self.phase {
            self.current_point = Some(input.point());
        }
        self.phase = next;
        for effect in &effects {
            if let Effect::SetSelectionVisible(v) = effect {
                self.selection_visible = *v;
            }
        }
        effects
    }

    /// Programmatically place and confirm a selection.
    ///
    /// Outside (or non-finite) points are rejected and produce no effects,
    /// mirroring the pointer path.
    pub fn set_selection(&mut self, point: [f64; 2]) -> Vec<Effect> {
        if !self.triangle.is_inside(point) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        effects.extend(feedback(&self.triangle, point));
        effects.extend(place(&self.triangle, point));
        effects.push(Effect::SetSelectionVisible(true));
        self.phase = Phase::Confirmed;
        self.current_point = Some(point);
        self.selection_visible = true;
        effects
    }

    /// Drop any selection and return to the initial phase.
    pub fn clear_selection(&mut self) -> Vec<Effect> {
        self.phase = Phase::Idle;
        self.current_point = None;
        self.selection_visible = false;
        vec![Effect::SetSelectionVisible(false)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geometry::Dimension;

    fn pad() -> Interaction {
        Interaction::new(Triangle::new(600.0))
    }

    fn centroid() -> [f64; 2] {
        Triangle::new(600.0).centroid()
    }

    fn written_values(effects: &[Effect]) -> Option<[f64; 3]> {
        effects.iter().find_map(|e| match e {
            Effect::WriteValues(v) => Some(*v),
            _ => None,
        })
    }

    #[test]
    fn click_at_centroid_confirms_and_writes_values() {
        let mut pad = pad();
        let effects = pad.handle(PadInput::Click(centroid()));
        assert_eq!(pad.phase(), Phase::Confirmed);
        assert!(pad.selection_visible());

        let values = written_values(&effects).expect("values must be written");
        let expected = pad.triangle().values(centroid());
        assert_eq!(values, expected);
        assert!(values.iter().all(|v| *v > 0.0));
        assert!(effects.contains(&Effect::SetSelectionVisible(true)));
        assert!(effects.contains(&Effect::MoveCrosshair(centroid())));
        assert!(effects.contains(&Effect::MoveSelection(centroid())));
    }

    #[test]
    fn click_at_a_corner_is_a_no_op() {
        let mut pad = pad();
        let corner = pad.triangle().corner(Dimension::First);
        let effects = pad.handle(PadInput::Click(corner));
        // The corner saturates its own dimension but sits on the boundary,
        // which classifies outside.
        assert!(effects.is_empty());
        assert_eq!(pad.phase(), Phase::Idle);
        assert_eq!(pad.current_point(), None);
    }

    #[test]
    fn click_while_confirmed_reopens_the_decision() {
        let mut pad = pad();
        pad.handle(PadInput::Click(centroid()));
        assert_eq!(pad.phase(), Phase::Confirmed);

        let effects = pad.handle(PadInput::Click([310.0, 320.0]));
        assert_eq!(pad.phase(), Phase::Hovering);
        assert!(!pad.selection_visible());
        assert!(effects.contains(&Effect::SetSelectionVisible(false)));
        // Reconsidering gives feedback but does not write new values.
        assert!(written_values(&effects).is_none());
    }

    #[test]
    fn move_enters_then_tracks() {
        let mut pad = pad();
        let first = pad.handle(PadInput::Move(centroid()));
        assert_eq!(pad.phase(), Phase::Hovering);
        assert_eq!(first, vec![Effect::SetSelectionVisible(false)]);

        let second = pad.handle(PadInput::Move([305.0, 325.0]));
        assert_eq!(pad.phase(), Phase::Hovering);
        assert!(second.contains(&Effect::MoveCrosshair([305.0, 325.0])));
        assert!(written_values(&second).is_some());
    }

    #[test]
    fn motion_outside_is_a_no_op() {
        let mut pad = pad();
        pad.handle(PadInput::Move(centroid()));
        let effects = pad.handle(PadInput::Move([0.0, 0.0]));
        assert!(effects.is_empty());
        assert_eq!(pad.phase(), Phase::Hovering);
    }

    #[test]
    fn confirmed_point_survives_plain_motion() {
        let mut pad = pad();
        pad.handle(PadInput::Click(centroid()));
        let effects = pad.handle(PadInput::Move([320.0, 330.0]));
        assert!(effects.is_empty());
        assert_eq!(pad.phase(), Phase::Confirmed);
        assert!(pad.selection_visible());
    }

    #[test]
    fn touch_enters_then_places_without_confirming() {
        let mut pad = pad();
        let enter = pad.handle(PadInput::TouchMove(centroid()));
        assert!(enter.is_empty());
        assert_eq!(pad.phase(), Phase::Hovering);

        let placed = pad.handle(PadInput::TouchMove([310.0, 330.0]));
        assert_eq!(pad.phase(), Phase::Placed);
        assert!(written_values(&placed).is_some());

        // Mouse motion afterwards reopens the decision and hides the marker.
        let reopened = pad.handle(PadInput::Move([312.0, 331.0]));
        assert_eq!(pad.phase(), Phase::Hovering);
        assert_eq!(reopened, vec![Effect::SetSelectionVisible(false)]);
    }

    #[test]
    fn touch_drag_replaces_a_confirmed_point() {
        let mut pad = pad();
        pad.handle(PadInput::Click(centroid()));
        let effects = pad.handle(PadInput::TouchMove([320.0, 340.0]));
        assert_eq!(pad.phase(), Phase::Confirmed);
        assert!(written_values(&effects).is_some());
        assert!(effects.contains(&Effect::MoveSelection([320.0, 340.0])));
    }

    #[test]
    fn nan_input_never_transitions() {
        let mut pad = pad();
        for input in [
            PadInput::Click([f64::NAN, 300.0]),
            PadInput::Move([300.0, f64::NAN]),
            PadInput::TouchMove([f64::NAN, f64::NAN]),
        ] {
            let effects = pad.handle(input);
            assert!(effects.is_empty());
            assert_eq!(pad.phase(), Phase::Idle);
            assert_eq!(pad.current_point(), None);
        }
    }

    #[test]
    fn programmatic_selection_mirrors_a_click() {
        let mut pad = pad();
        let effects = pad.set_selection(centroid());
        assert_eq!(pad.phase(), Phase::Confirmed);
        assert!(written_values(&effects).is_some());

        let rejected = pad.set_selection([0.0, 0.0]);
        assert!(rejected.is_empty());
        assert_eq!(pad.phase(), Phase::Confirmed);

        pad.clear_selection();
        assert_eq!(pad.phase(), Phase::Idle);
        assert!(!pad.selection_visible());
        assert_eq!(pad.current_point(), None);
    }
}
