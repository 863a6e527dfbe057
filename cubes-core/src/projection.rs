/// Canvas configuration and the fixed 45° cuboid projection
use nalgebra::{Point2, Vector2};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Dimensions, Segment, Wireframe};

/// Logical drawing area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const DEFAULT_WIDTH: u32 = 600;
    pub const DEFAULT_HEIGHT: u32 = 600;

    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Centre of the canvas, where every cuboid is anchored
    pub fn origin(&self) -> Point2<f64> {
        Point2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Horizontal (and vertical) offset of a 45° diagonal of length `length`
///
/// `sqrt(length² / 2)`: the legs of a right isosceles triangle whose
/// hypotenuse is the axis. Squaring first keeps the root operand
/// non-negative for every input.
pub fn leg(length: i64) -> f64 {
    let length = length as f64;
    (length * length / 2.0).sqrt()
}

/// Projects cuboid dimensions into window-space line segments
///
/// Width runs up and to the right at 45°, depth up and to the left at 45°,
/// and height straight down, all anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    origin: Point2<f64>,
}

impl Projector {
    pub fn new(origin: Point2<f64>) -> Self {
        Self { origin }
    }

    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self::new(canvas.origin())
    }

    pub fn origin(&self) -> Point2<f64> {
        self.origin
    }

    pub fn project(&self, x: i64, y: i64, z: i64) -> Wireframe {
        self.project_dimensions(Dimensions::new(x, y, z))
    }

    pub fn project_dimensions(&self, dimensions: Dimensions) -> Wireframe {
        let x_leg = leg(dimensions.x);
        let z_leg = leg(dimensions.z);
        debug!(?dimensions, x_leg, z_leg, "projecting cuboid");

        let width = Vector2::new(x_leg, -x_leg);
        let depth = Vector2::new(-z_leg, -z_leg);
        let height = Vector2::new(0.0, dimensions.y as f64);

        let top_front = self.origin;
        let bottom_front = top_front + height;
        let top_right = top_front + width;
        let bottom_right = top_right + height;
        let top_left = top_front + depth;
        let bottom_left = top_left + height;
        let top_back = top_right + depth;

        Wireframe::new([
            // Right face
            Segment::new(top_front, top_right),
            Segment::new(top_front, bottom_front),
            Segment::new(bottom_front, bottom_right),
            Segment::new(top_right, bottom_right),
            // Left face
            Segment::new(top_front, top_left),
            Segment::new(top_left, bottom_left),
            Segment::new(bottom_front, bottom_left),
            // Top face
            Segment::new(top_right, top_back),
            Segment::new(top_back, top_left),
        ])
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::for_canvas(&Canvas::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Face;

    const EPS: f64 = 1e-4;

    fn assert_point(p: Point2<f64>, x: f64, y: f64) {
        assert!(
            (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    fn mirror(p: Point2<f64>) -> Point2<f64> {
        Point2::new(600.0 - p.x, p.y)
    }

    #[test]
    fn test_canvas_origin() {
        assert_point(Canvas::default().origin(), 300.0, 300.0);
        assert_point(Canvas::new(800, 400).unwrap().origin(), 400.0, 200.0);
        assert!(Canvas::new(0, 600).is_err());
    }

    #[test]
    fn test_leg() {
        assert!((leg(200) - 141.4214).abs() < EPS);
        assert!((leg(400) - 282.8427).abs() < EPS);
        assert_eq!(leg(0), 0.0);
        assert_eq!(leg(-200), leg(200));
        assert!(leg(i64::MAX).is_finite());
    }

    #[test]
    fn test_always_nine_segments() {
        let projector = Projector::default();
        for (x, y, z) in [(0, 0, 0), (200, 300, 400), (-50, -10, 7), (1, i64::MIN, i64::MAX)] {
            assert_eq!(projector.project(x, y, z).len(), 9);
        }
    }

    #[test]
    fn test_zero_collapses_to_origin() {
        let wireframe = Projector::default().project(0, 0, 0);
        for segment in &wireframe {
            assert_eq!(segment.as_tuple(), (300.0, 300.0, 300.0, 300.0));
            assert!(segment.is_degenerate());
        }
    }

    #[test]
    fn test_reference_cuboid() {
        let wireframe = Projector::default().project(200, 300, 400);
        let s = wireframe.segments();
        let xl = 141.4214;
        let zl = 282.8427;

        assert_point(s[0].start, 300.0, 300.0);
        assert_point(s[0].end, 300.0 + xl, 300.0 - xl);
        assert_point(s[1].start, 300.0, 300.0);
        assert_point(s[1].end, 300.0, 600.0);
        assert_point(s[2].start, 300.0, 600.0);
        assert_point(s[2].end, 300.0 + xl, 600.0 - xl);
        assert_point(s[3].start, 300.0 + xl, 300.0 - xl);
        assert_point(s[3].end, 300.0 + xl, 600.0 - xl);
        assert_point(s[4].start, 300.0, 300.0);
        assert_point(s[4].end, 300.0 - zl, 300.0 - zl);
        assert_point(s[5].start, 300.0 - zl, 300.0 - zl);
        assert_point(s[5].end, 300.0 - zl, 600.0 - zl);
        assert_point(s[6].start, 300.0, 600.0);
        assert_point(s[6].end, 300.0 - zl, 600.0 - zl);
        assert_point(s[7].start, 300.0 + xl, 300.0 - xl);
        assert_point(s[7].end, 300.0 + xl - zl, 300.0 - xl - zl);
        assert_point(s[8].start, 300.0 + xl - zl, 300.0 - xl - zl);
        assert_point(s[8].end, 300.0 - zl, 300.0 - zl);
    }

    #[test]
    fn test_swapping_width_and_depth_mirrors_faces() {
        let projector = Projector::default();
        let dims = Dimensions::new(120, 80, 250);
        let original = projector.project_dimensions(dims);
        let swapped = projector.project_dimensions(dims.swapped_xz());
        let a = original.segments();
        let b = swapped.segments();

        for (i, j) in [(0, 4), (2, 6), (3, 5), (1, 1)] {
            assert_point(b[j].start, mirror(a[i].start).x, mirror(a[i].start).y);
            assert_point(b[j].end, mirror(a[i].end).x, mirror(a[i].end).y);
        }
        // Top closure is traversed in the opposite direction
        assert_point(b[8].end, mirror(a[7].start).x, mirror(a[7].start).y);
        assert_point(b[8].start, mirror(a[7].end).x, mirror(a[7].end).y);
    }

    #[test]
    fn test_idempotent() {
        let projector = Projector::default();
        assert_eq!(projector.project(37, 91, 13), projector.project(37, 91, 13));
    }

    #[test]
    fn test_negative_height_flips_vertical_edges() {
        let projector = Projector::default();
        let down = projector.project(100, 50, 100);
        let up = projector.project(100, -50, 100);

        assert_point(up.segments()[1].end, 300.0, 250.0);
        assert_eq!(down.face(Face::Top), up.face(Face::Top));
        assert_eq!(down.segments()[0], up.segments()[0]);
        assert_eq!(down.segments()[4], up.segments()[4]);
    }

    #[test]
    fn test_custom_origin() {
        let projector = Projector::new(Point2::new(10.0, 20.0));
        let wireframe = projector.project(0, 5, 0);
        assert_point(wireframe.segments()[1].end, 10.0, 25.0);
    }
}
