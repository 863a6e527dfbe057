/// SVG drawing surface
use std::{fs, path::Path};

use tracing::debug;

use crate::error::Result;
use crate::projection::Canvas;
use crate::surface::Surface;

/// Collects draw commands as `<line>` elements of a standalone SVG document
#[derive(Debug)]
pub struct SvgSurface {
    canvas: Canvas,
    content: String,
}

impl SvgSurface {
    pub fn new(canvas: Canvas) -> Self {
        let mut content = format!(
            r#"<svg height="{}" width="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            canvas.height, canvas.width, canvas.width, canvas.height
        );
        content += "\n";
        content += &format!(
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            canvas.width, canvas.height
        );
        content += "\n";

        Self { canvas, content }
    }

    /// Close the document and return its text
    pub fn finish(mut self) -> String {
        self.content += "</svg>\n";
        self.content
    }

    /// Close the document and write it to `path`
    pub fn save(self, path: &Path) -> Result<()> {
        let content = self.finish();
        debug!(path = %path.display(), bytes = content.len(), "writing svg");
        fs::write(path, content)?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width, self.canvas.height)
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.content += &format!(
            r#"<line stroke-width="1" stroke="black" x1="{x1:.4}" y1="{y1:.4}" x2="{x2:.4}" y2="{y2:.4}"/>"#
        );
        self.content += "\n";
    }
}
