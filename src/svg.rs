//! Minimal immediate-mode SVG writer.
//!
//! Only the primitives the renderer needs: a solid background, black
//! round-capped lines and circles. Elements are serialized as they are
//! drawn.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Matches the cairo default line width of the original tool.
const STROKE_WIDTH: f32 = 2.0;

pub struct Canvas {
    width: f32,
    height: f32,

    /// Serialized elements, in draw order.
    body: String,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Fill the whole canvas with a solid color.
    pub fn fill_background(&mut self, color: &str) {
        // Writing to a String cannot fail.
        writeln!(
            &mut self.body,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{color}\"/>"
        )
        .unwrap();
    }

    /// Draw a black round-capped line segment.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32)) {
        writeln!(
            &mut self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
             stroke=\"black\" stroke-width=\"{STROKE_WIDTH}\" stroke-linecap=\"round\"/>",
            from.0, from.1, to.0, to.1
        )
        .unwrap();
    }

    /// Draw a black-stroked circle, optionally filled black.
    pub fn circle(&mut self, center: (f32, f32), radius: f32, filled: bool) {
        let fill = if filled { "black" } else { "none" };

        writeln!(
            &mut self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" \
             fill=\"{fill}\" stroke=\"black\" stroke-width=\"{STROKE_WIDTH}\"/>",
            center.0, center.1, radius
        )
        .unwrap();
    }

    pub fn to_svg_string(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);

        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        write!(
            &mut svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}pt\" height=\"{h}pt\" \
             viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        )
        .unwrap();
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");

        svg
    }

    /// Write the document to `path` in one shot.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_svg_string())
    }
}
