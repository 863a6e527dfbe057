/// Geometry primitives for the cuboid wireframe
use nalgebra::Point2;
use std::ops::Range;

/// Number of edges drawn for one cuboid
pub const SEGMENT_COUNT: usize = 9;

/// Width, height and depth of a cuboid in pixels
///
/// Values are not validated; zero or negative lengths give collapsed or
/// mirrored geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Dimensions {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The same cuboid with width and depth exchanged
    pub fn swapped_xz(self) -> Self {
        Self {
            x: self.z,
            y: self.y,
            z: self.x,
        }
    }
}

/// A single edge in window space, from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// The `(x1, y1, x2, y2)` form expected by line drawing calls
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// True when both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        self.length() < 1e-9
    }
}

/// Edge groups of the wireframe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Width face, right of the origin
    Right,
    /// Depth face, left of the origin
    Left,
    /// Closing edges of the top parallelogram
    Top,
}

impl Face {
    pub const ALL: [Face; 3] = [Face::Right, Face::Left, Face::Top];

    fn range(self) -> Range<usize> {
        match self {
            Face::Right => 0..4,
            Face::Left => 4..7,
            Face::Top => 7..9,
        }
    }
}

/// Axis-aligned box around a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether the box lies inside `[0, width] x [0, height]`
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.min.x >= 0.0 && self.min.y >= 0.0 && self.max.x <= width && self.max.y <= height
    }
}

/// The nine edges of a projected cuboid, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    segments: [Segment; SEGMENT_COUNT],
}

impl Wireframe {
    pub fn new(segments: [Segment; SEGMENT_COUNT]) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Edges belonging to one face, in drawing order
    pub fn face(&self, face: Face) -> &[Segment] {
        &self.segments[face.range()]
    }

    /// Bounding box of every endpoint
    pub fn bounds(&self) -> Bounds {
        let first = self.segments[0].start;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };

        for segment in &self.segments {
            for point in [segment.start, segment.end] {
                bounds.min.x = bounds.min.x.min(point.x);
                bounds.min.y = bounds.min.y.min(point.y);
                bounds.max.x = bounds.max.x.max(point.x);
                bounds.max.y = bounds.max.y.max(point.y);
            }
        }

        bounds
    }
}

impl<'a> IntoIterator for &'a Wireframe {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
