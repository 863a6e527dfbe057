/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cubes_core::{Canvas, Surface};
use nalgebra::{Point2, Vector2};
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

const CORNER: char = '+';

/// Character-grid surface that maps the logical canvas onto terminal cells
pub struct AsciiCanvas {
    canvas: Canvas,
    columns: usize,
    rows: usize,
    scale: Vector2<f64>,
    offset: Vector2<f64>,
    char_buffer: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(canvas: Canvas, columns: usize, rows: usize) -> Self {
        // Uniform scale in pixel terms, letterboxed inside the grid
        let fit = (columns as f64 / canvas.width as f64)
            .min(rows as f64 * CELL_ASPECT / canvas.height as f64);
        let scale = Vector2::new(fit, fit / CELL_ASPECT);
        let offset = Vector2::new(
            (columns as f64 - canvas.width as f64 * scale.x) / 2.0,
            (rows as f64 - canvas.height as f64 * scale.y) / 2.0,
        );

        Self {
            canvas,
            columns,
            rows,
            scale,
            offset,
            char_buffer: vec![' '; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn char_at(&self, column: usize, row: usize) -> Option<char> {
        if column < self.columns && row < self.rows {
            Some(self.char_buffer[row * self.columns + column])
        } else {
            None
        }
    }

    /// Buffer contents, one string per row
    pub fn lines(&self) -> Vec<String> {
        self.char_buffer
            .chunks(self.columns.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }

    fn to_cell(&self, x: f64, y: f64) -> Point2<f64> {
        Point2::new(
            x * self.scale.x + self.offset.x,
            y * self.scale.y + self.offset.y,
        )
    }

    fn plot(&mut self, point: Point2<f64>, character: char) {
        let (column, row) = (point.x.floor(), point.y.floor());
        if column < 0.0 || row < 0.0 {
            return;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.columns || row >= self.rows {
            return;
        }

        let idx = row * self.columns + column;
        // Corners win over edge glyphs
        if self.char_buffer[idx] != CORNER {
            self.char_buffer[idx] = character;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.rows {
            for x in 0..self.columns {
                let c = self.char_buffer[y * self.columns + x];

                let color = match c {
                    CORNER => Color::Cyan,
                    ' ' => Color::DarkGrey,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.rows {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for AsciiCanvas {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width, self.canvas.height)
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let glyph = line_glyph(x2 - x1, y2 - y1);
        let start = self.to_cell(x1, y1);
        let end = self.to_cell(x2, y2);

        let bounds = (
            Point2::new(-1.0, -1.0),
            Point2::new(self.columns as f64 + 1.0, self.rows as f64 + 1.0),
        );
        if let Some((a, b)) = clip(start, end, bounds) {
            let delta = b - a;
            let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                self.plot(a + delta * t, glyph);
            }
        }

        self.plot(start, CORNER);
        self.plot(end, CORNER);
    }
}

/// Pick the edge character for a direction in pixel space (y grows downward)
fn line_glyph(dx: f64, dy: f64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay <= ax * 0.4 {
        '-'
    } else if ax <= ay * 0.4 {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of `a -> b` against the box `(min, max)`
fn clip(
    a: Point2<f64>,
    b: Point2<f64>,
    (min, max): (Point2<f64>, Point2<f64>),
) -> Option<(Point2<f64>, Point2<f64>)> {
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p.abs() < 1e-12 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((a + d * t0, a + d * t1))
}
