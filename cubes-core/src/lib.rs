/// Cubes Core Library - Cuboid projection geometry
///
/// This library provides the stateless core for drawing a wireframe cuboid:
/// the fixed 45° projection, the line-drawing surface abstraction, and an
/// SVG surface.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod surface;
pub mod svg;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Bounds, Dimensions, Face, Segment, Wireframe};
pub use projection::{Canvas, Projector};
pub use surface::{draw_wireframe, Surface};
pub use svg::SvgSurface;
