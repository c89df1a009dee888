//! Playfield geometry and the overlap test used for every collision check.
//!
//! The overlap test is vertex-in-polygon: a shape overlaps another when one of
//! its vertices lies inside (or on the boundary of) the other. For two equal
//! axis-aligned squares this is exact. For differently shaped quads it misses
//! crossing configurations where no vertex of the first lies in the second.

use serde::{Deserialize, Serialize};

/// A position on the continuous playfield
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta
    pub fn moved_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A convex quadrilateral given by its vertices in clockwise screen order
/// (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [Point; 4],
}

impl Quad {
    /// Axis-aligned square with the given top-left corner
    pub fn square(top_left: Point, width: f32) -> Self {
        Self::rect(top_left, width, width)
    }

    /// Axis-aligned rectangle with the given top-left corner
    pub fn rect(top_left: Point, width: f32, height: f32) -> Self {
        Self {
            vertices: [
                top_left,
                top_left.moved_by(width, 0.0),
                top_left.moved_by(width, height),
                top_left.moved_by(0.0, height),
            ],
        }
    }

    /// Whether `p` lies inside or on the boundary of this quad.
    ///
    /// The cross product against each edge must never be positive.
    pub fn contains(&self, p: Point) -> bool {
        (0..4).all(|i| {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % 4];
            let d = (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x);
            d <= 0.0
        })
    }
}

/// Whether any vertex of `a` lies inside `b`
pub fn quad_vertex_overlap(a: &Quad, b: &Quad) -> bool {
    a.vertices.iter().any(|&v| b.contains(v))
}

/// Overlap test for two equal squares given by their top-left corners.
///
/// Touching edges count as overlap.
pub fn squares_overlap(a: Point, b: Point, width: f32) -> bool {
    quad_vertex_overlap(&Quad::square(a, width), &Quad::square(b, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_movement() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(p.moved_by(2.0, 0.0), Point::new(7.0, 5.0));
        assert_eq!(p.moved_by(0.0, -1.5), Point::new(5.0, 3.5));
    }

    #[test]
    fn test_quad_contains_boundary() {
        let q = Quad::square(Point::new(0.0, 0.0), 10.0);
        assert!(q.contains(Point::new(5.0, 5.0)));
        assert!(q.contains(Point::new(0.0, 0.0)));
        assert!(q.contains(Point::new(10.0, 10.0)));
        assert!(q.contains(Point::new(10.0, 3.0)));
        assert!(!q.contains(Point::new(10.01, 3.0)));
        assert!(!q.contains(Point::new(3.0, -0.01)));
    }

    #[test]
    fn test_overlapping_squares() {
        let a = Point::new(100.0, 100.0);
        assert!(squares_overlap(a, Point::new(105.0, 103.0), 10.0));
        assert!(squares_overlap(a, Point::new(95.0, 97.0), 10.0));
        assert!(squares_overlap(a, a, 10.0));
    }

    #[test]
    fn test_adjacent_squares_touch() {
        let a = Point::new(0.0, 0.0);
        assert!(squares_overlap(a, Point::new(10.0, 0.0), 10.0));
        assert!(squares_overlap(a, Point::new(0.0, 10.0), 10.0));
        assert!(squares_overlap(a, Point::new(10.0, 10.0), 10.0));
    }

    #[test]
    fn test_disjoint_squares() {
        let a = Point::new(0.0, 0.0);
        assert!(!squares_overlap(a, Point::new(10.5, 0.0), 10.0));
        assert!(!squares_overlap(a, Point::new(0.0, -10.5), 10.0));
        assert!(!squares_overlap(a, Point::new(50.0, 50.0), 10.0));
    }

    #[test]
    fn test_equal_squares_symmetric() {
        let fixtures = [
            (Point::new(0.0, 0.0), Point::new(4.0, 7.0)),
            (Point::new(0.0, 0.0), Point::new(-9.0, 2.0)),
            (Point::new(0.0, 0.0), Point::new(10.0, -10.0)),
            (Point::new(0.0, 0.0), Point::new(11.0, 0.0)),
            (Point::new(3.0, 3.0), Point::new(40.0, 1.0)),
        ];

        for (a, b) in fixtures {
            assert_eq!(squares_overlap(a, b, 10.0), squares_overlap(b, a, 10.0));
        }
    }

    #[test]
    fn test_cross_configuration_is_missed() {
        // A wide bar and a tall bar crossing like a plus sign: they share
        // area but neither has a vertex inside the other.
        let wide = Quad::rect(Point::new(0.0, 4.0), 12.0, 2.0);
        let tall = Quad::rect(Point::new(4.0, 0.0), 2.0, 12.0);

        assert!(!quad_vertex_overlap(&wide, &tall));
        assert!(!quad_vertex_overlap(&tall, &wide));
    }
}
