//! Triangle geometry and the per-corner value mapping.
//!
//! All coordinates live in "pad space": a square viewport of
//! `element_size × element_size` logical units with the origin in the top-left
//! corner and y growing downwards (matching screen conventions). The UI layer
//! converts between pad space and screen pixels; everything in this module is
//! independent of any rendering surface.

use serde::{Deserialize, Serialize};

/// One of the three output slots, each bound to a fixed triangle corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Bound to the top-center corner.
    First,
    /// Bound to the bottom-right corner.
    Second,
    /// Bound to the bottom-left corner.
    Third,
}

impl Dimension {
    /// All three dimensions in corner order.
    pub const ALL: [Dimension; 3] = [Dimension::First, Dimension::Second, Dimension::Third];

    /// Zero-based index into `[f64; 3]` value arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Dimension::First => 0,
            Dimension::Second => 1,
            Dimension::Third => 2,
        }
    }
}

/// An equilateral triangle inscribed in a square pad viewport.
///
/// The shape is fully determined by `element_size`; the margin is fixed at one
/// sixth of it. Corners are computed once at construction and never move.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    element_size: f64,
    margin: f64,
    side_length: f64,
    height: f64,
    corners: [[f64; 2]; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(600.0)
    }
}

impl Triangle {
    /// Build a triangle for a pad viewport of the given edge length.
    pub fn new(element_size: f64) -> Self {
        let margin = element_size / 6.0;
        let side_length = element_size - 2.0 * margin;
        let height = side_length * 3f64.sqrt() / 2.0;
        let corners = [
            [element_size / 2.0, margin],
            [element_size - margin, margin + height],
            [margin, margin + height],
        ];
        Self {
            element_size,
            margin,
            side_length,
            height,
            corners,
        }
    }

    #[inline]
    pub fn element_size(&self) -> f64 {
        self.element_size
    }

    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Label offset distance used when anchoring corner labels.
    #[inline]
    pub fn padding(&self) -> f64 {
        self.margin / 5.0
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The corner a dimension is bound to.
    #[inline]
    pub fn corner(&self, dim: Dimension) -> [f64; 2] {
        self.corners[dim.index()]
    }

    /// All three corners in dimension order.
    #[inline]
    pub fn corners(&self) -> &[[f64; 2]; 3] {
        &self.corners
    }

    /// Geometric center of the triangle.
    pub fn centroid(&self) -> [f64; 2] {
        [
            self.element_size / 2.0,
            self.margin + self.side_length * 3f64.sqrt() / 3.0,
        ]
    }

    /// Radial falloff score of `point` with respect to one corner.
    ///
    /// The score is 1 at the corner itself, decays with the square root of
    /// the remaining distance, and is exactly 0 everywhere at distance
    /// `side_length` or further. Non-finite input yields a non-positive
    /// (NaN) score, so such points never pass [`Triangle::is_inside`].
    pub fn dimension_value(&self, point: [f64; 2], dim: Dimension) -> f64 {
        let corner = self.corner(dim);
        let dx = point[0] - corner[0];
        let dy = point[1] - corner[1];
        let distance = (dx * dx + dy * dy).sqrt();
        let remaining = self.side_length - distance;
        if remaining <= 0.0 {
            0.0
        } else {
            remaining.sqrt() / self.side_length.sqrt()
        }
    }

    /// All three dimension values for a point, in dimension order.
    pub fn values(&self, point: [f64; 2]) -> [f64; 3] {
        [
            self.dimension_value(point, Dimension::First),
            self.dimension_value(point, Dimension::Second),
            self.dimension_value(point, Dimension::Third),
        ]
    }

    /// Whether a point is accepted as "on the triangle".
    ///
    /// True iff all three corner scores are strictly positive, i.e. the point
    /// lies strictly within `side_length` of every corner. The accepted
    /// region is the intersection of three discs and bulges slightly beyond
    /// the straight edges; its boundary (corners included) scores 0 for at
    /// least one corner and counts as outside, as do NaN or otherwise
    /// non-finite coordinates. This is the single containment chokepoint for
    /// degenerate pointer input.
    pub fn is_inside(&self, point: [f64; 2]) -> bool {
        self.values(point).into_iter().all(|v| v > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn derived_measurements_for_default_size() {
        let tri = Triangle::new(600.0);
        assert!((tri.margin() - 100.0).abs() < EPS);
        assert!((tri.side_length() - 400.0).abs() < EPS);
        assert!((tri.height() - 400.0 * 3f64.sqrt() / 2.0).abs() < EPS);
        assert_eq!(tri.corner(Dimension::First), [300.0, 100.0]);
        let low_y = 100.0 + tri.height();
        assert!((tri.corner(Dimension::Second)[0] - 500.0).abs() < EPS);
        assert!((tri.corner(Dimension::Second)[1] - low_y).abs() < EPS);
        assert!((tri.corner(Dimension::Third)[0] - 100.0).abs() < EPS);
        assert!((tri.corner(Dimension::Third)[1] - low_y).abs() < EPS);
    }

    #[test]
    fn corners_never_move() {
        let tri = Triangle::new(600.0);
        let before = *tri.corners();
        // Exercising the mapping must not disturb the shape.
        let _ = tri.values([250.0, 250.0]);
        let _ = tri.is_inside([f64::NAN, 0.0]);
        assert_eq!(*tri.corners(), before);
    }

    #[test]
    fn value_is_one_at_own_corner() {
        let tri = Triangle::new(600.0);
        for dim in Dimension::ALL {
            let v = tri.dimension_value(tri.corner(dim), dim);
            assert!((v - 1.0).abs() < EPS, "corner {:?} scored {}", dim, v);
        }
    }

    #[test]
    fn value_is_zero_at_and_beyond_side_length() {
        let tri = Triangle::new(600.0);
        let corner = tri.corner(Dimension::First);
        // Exactly side_length away.
        let at = [corner[0], corner[1] + tri.side_length()];
        assert_eq!(tri.dimension_value(at, Dimension::First), 0.0);
        // Far beyond.
        let beyond = [corner[0] + 1000.0, corner[1] + 1000.0];
        assert_eq!(tri.dimension_value(beyond, Dimension::First), 0.0);
    }

    #[test]
    fn corner_positions_classify_outside() {
        let tri = Triangle::new(600.0);
        // A corner saturates its own dimension but is side_length away from
        // the other two corners, so their scores are 0.
        for dim in Dimension::ALL {
            let p = tri.corner(dim);
            let values = tri.values(p);
            assert!((values[dim.index()] - 1.0).abs() < EPS);
            assert!(!tri.is_inside(p), "corner {:?} must be outside", dim);
        }
    }

    #[test]
    fn arc_apex_opposite_a_corner_classifies_outside() {
        let tri = Triangle::new(600.0);
        // Straight down from the top corner, exactly side_length away: the
        // bulge apex of the accepted region, where the top corner's score is
        // exactly 0.
        let apex = [300.0, 100.0 + tri.side_length()];
        assert_eq!(tri.dimension_value(apex, Dimension::First), 0.0);
        assert!(!tri.is_inside(apex));
    }

    #[test]
    fn accepted_region_is_disc_intersection_not_polygon() {
        let tri = Triangle::new(600.0);
        let c = tri.corners();
        // Chord midpoints sit within side_length of every corner, so the
        // accepted region reaches slightly beyond the straight edges.
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let mid = [(c[a][0] + c[b][0]) / 2.0, (c[a][1] + c[b][1]) / 2.0];
            assert!(tri.is_inside(mid), "chord midpoint of {}-{} rejected", a, b);
        }
    }

    #[test]
    fn centroid_is_inside_with_roughly_equal_values() {
        let tri = Triangle::new(600.0);
        let centroid = tri.centroid();
        assert!((centroid[0] - 300.0).abs() < EPS);
        assert!((centroid[1] - (100.0 + 400.0 * 3f64.sqrt() / 3.0)).abs() < EPS);
        assert!(tri.is_inside(centroid));
        let values = tri.values(centroid);
        for v in values {
            assert!(v > 0.0 && v < 1.0);
            assert!(
                (v - values[0]).abs() < 1e-6,
                "centroid values differ: {:?}",
                values
            );
        }
    }

    #[test]
    fn values_do_not_sum_to_a_constant() {
        let tri = Triangle::new(600.0);
        let near_corner = [300.0, 110.0];
        let near_center = tri.centroid();
        let sum = |p: [f64; 2]| tri.values(p).iter().sum::<f64>();
        assert!((sum(near_corner) - sum(near_center)).abs() > 1e-3);
    }

    #[test]
    fn non_finite_points_are_outside() {
        let tri = Triangle::new(600.0);
        for p in [
            [f64::NAN, 200.0],
            [200.0, f64::NAN],
            [f64::INFINITY, 200.0],
            [200.0, f64::NEG_INFINITY],
        ] {
            assert!(!tri.is_inside(p), "{:?} must classify outside", p);
        }
    }
}
