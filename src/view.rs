//! The rendering-collaborator seam.
//!
//! The interaction core never draws; it produces [`Effect`]s which
//! [`dispatch`] translates into calls on a [`PadView`]. The bundled egui
//! panel implements `PadView` on its visual state; tests implement it with a
//! recording double; a custom frontend can implement it to drive any other
//! surface.

use crate::data::geometry::Dimension;
use crate::data::interaction::Effect;

/// Identifies one of the two pad markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    /// Transient pointer-following marker, drawn semi-transparent.
    Crosshair,
    /// Persistent marker for the last placed point, drawn opaque.
    Selection,
}

/// Receiver for the widget's visual side effects.
///
/// Implementations own all drawing; the core only decides *what* changes.
pub trait PadView {
    /// Move a marker to a pad-space point.
    fn move_marker(&mut self, marker: MarkerId, point: [f64; 2]);

    /// Update one corner label's emphasis with a fresh dimension value.
    fn set_label_emphasis(&mut self, dimension: Dimension, value: f64);

    /// Show or hide a marker.
    fn set_marker_visible(&mut self, marker: MarkerId, visible: bool);

    /// Write the three dimension values to the output fields.
    fn write_values(&mut self, values: [f64; 3]);
}

/// Apply a transition's effects to a view, in order.
pub fn dispatch(effects: &[Effect], view: &mut dyn PadView) {
    for effect in effects {
        match effect {
            Effect::MoveCrosshair(p) => view.move_marker(MarkerId::Crosshair, *p),
            Effect::Emphasize(values) => {
                for dim in Dimension::ALL {
                    view.set_label_emphasis(dim, values[dim.index()]);
                }
            }
            Effect::MoveSelection(p) => view.move_marker(MarkerId::Selection, *p),
            Effect::WriteValues(values) => view.write_values(*values),
            Effect::SetSelectionVisible(v) => view.set_marker_visible(MarkerId::Selection, *v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geometry::Triangle;
    use crate::data::interaction::{Interaction, PadInput};

    #[derive(Default)]
    struct RecordingView {
        marker_moves: Vec<(MarkerId, [f64; 2])>,
        emphases: Vec<(Dimension, f64)>,
        visibility: Vec<(MarkerId, bool)>,
        written: Vec<[f64; 3]>,
    }

    impl PadView for RecordingView {
        fn move_marker(&mut self, marker: MarkerId, point: [f64; 2]) {
            self.marker_moves.push((marker, point));
        }
        fn set_label_emphasis(&mut self, dimension: Dimension, value: f64) {
            self.emphases.push((dimension, value));
        }
        fn set_marker_visible(&mut self, marker: MarkerId, visible: bool) {
            self.visibility.push((marker, visible));
        }
        fn write_values(&mut self, values: [f64; 3]) {
            self.written.push(values);
        }
    }

    #[test]
    fn confirming_click_reaches_every_collaborator_call() {
        let triangle = Triangle::new(600.0);
        let centroid = triangle.centroid();
        let mut pad = Interaction::new(triangle);
        let mut view = RecordingView::default();

        dispatch(&pad.handle(PadInput::Click(centroid)), &mut view);

        assert!(view.marker_moves.contains(&(MarkerId::Crosshair, centroid)));
        assert!(view.marker_moves.contains(&(MarkerId::Selection, centroid)));
        assert_eq!(view.emphases.len(), 3);
        assert_eq!(view.written.len(), 1);
        assert_eq!(view.visibility, vec![(MarkerId::Selection, true)]);
    }

    #[test]
    fn emphasis_fans_out_per_dimension_in_order() {
        let triangle = Triangle::new(600.0);
        let point = [310.0, 330.0];
        let values = triangle.values(point);
        let mut view = RecordingView::default();

        dispatch(&[Effect::Emphasize(values)], &mut view);

        assert_eq!(
            view.emphases,
            vec![
                (Dimension::First, values[0]),
                (Dimension::Second, values[1]),
                (Dimension::Third, values[2]),
            ]
        );
    }

    #[test]
    fn no_op_transition_touches_nothing() {
        let mut pad = Interaction::new(Triangle::new(600.0));
        let mut view = RecordingView::default();
        dispatch(&pad.handle(PadInput::Move([5.0, 5.0])), &mut view);
        assert!(view.marker_moves.is_empty());
        assert!(view.emphases.is_empty());
        assert!(view.visibility.is_empty());
        assert!(view.written.is_empty());
    }
}
