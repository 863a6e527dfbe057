/// Line-drawing surfaces that consume a projected wireframe
use tracing::{trace, warn};

use crate::geometry::Wireframe;

/// A fixed-size target accepting line draw commands in pixel coordinates
pub trait Surface {
    /// Logical size in pixels as `(width, height)`
    fn size(&self) -> (u32, u32);

    /// Draw a line from `(x1, y1)` to `(x2, y2)`; clipping is up to the surface
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// Issue one `draw_line` per segment, in wireframe order
pub fn draw_wireframe<S: Surface + ?Sized>(surface: &mut S, wireframe: &Wireframe) {
    let (width, height) = surface.size();
    if !wireframe.bounds().fits_within(width as f64, height as f64) {
        warn!(width, height, "wireframe extends past the surface and will be clipped");
    }

    for (index, segment) in wireframe.iter().enumerate() {
        let (x1, y1, x2, y2) = segment.as_tuple();
        trace!(index, x1, y1, x2, y2, "draw line");
        surface.draw_line(x1, y1, x2, y2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Projector;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(f64, f64, f64, f64)>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (600, 600)
        }

        fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
            self.lines.push((x1, y1, x2, y2));
        }
    }

    #[test]
    fn test_draws_every_segment_in_order() {
        let wireframe = Projector::default().project(200, 300, 400);
        let mut recorder = Recorder::default();
        draw_wireframe(&mut recorder, &wireframe);

        let expected: Vec<_> = wireframe.iter().map(|s| s.as_tuple()).collect();
        assert_eq!(recorder.lines, expected);
    }

    #[test]
    fn test_draws_through_trait_object() {
        let wireframe = Projector::default().project(10, 10, 10);
        let mut recorder = Recorder::default();
        {
            let surface: &mut dyn Surface = &mut recorder;
            draw_wireframe(surface, &wireframe);
        }
        assert_eq!(recorder.lines.len(), 9);
    }
}
