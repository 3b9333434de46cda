//! Stroke-recording signature pad with SVG export

use super::traits::SignatureSurface;
use base64ct::{Base64, Encoding};
use std::fmt::Write;

/// Default logical width of a pad
pub const DEFAULT_PAD_WIDTH: f64 = 300.0;
/// Default logical height of a pad
pub const DEFAULT_PAD_HEIGHT: f64 = 100.0;

const STROKE_COLOR: &str = "black";
const STROKE_WIDTH: f64 = 2.0;
const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// A point in pad coordinates, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadPoint {
    pub x: f64,
    pub y: f64,
}

impl PadPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Records pen strokes in a fixed logical coordinate space
#[derive(Debug, Clone)]
pub struct SignaturePad {
    width: f64,
    height: f64,
    strokes: Vec<Vec<PadPoint>>,
    drawing: bool,
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new(DEFAULT_PAD_WIDTH, DEFAULT_PAD_HEIGHT)
    }
}

impl SignaturePad {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            strokes: Vec::new(),
            drawing: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn strokes(&self) -> &[Vec<PadPoint>] {
        &self.strokes
    }

    /// Whether a stroke is currently open
    #[allow(dead_code)]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn clamp(&self, point: PadPoint) -> PadPoint {
        PadPoint {
            x: point.x.clamp(0.0, self.width),
            y: point.y.clamp(0.0, self.height),
        }
    }

    /// Start a new stroke at the pen-down position
    pub fn begin_stroke(&mut self, point: PadPoint) {
        let point = self.clamp(point);
        self.strokes.push(vec![point]);
        self.drawing = true;
    }

    /// Extend the open stroke. Ignored when no stroke is open.
    pub fn extend_stroke(&mut self, point: PadPoint) {
        if !self.drawing {
            return;
        }
        let point = self.clamp(point);
        if let Some(stroke) = self.strokes.last_mut() {
            if stroke.last() != Some(&point) {
                stroke.push(point);
            }
        }
    }

    /// Close the open stroke
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Render all strokes as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height,
        );

        for stroke in &self.strokes {
            match stroke.as_slice() {
                [] => {}
                [dot] => {
                    let _ = write!(
                        svg,
                        r#"<circle cx="{}" cy="{}" r="{}" fill="{STROKE_COLOR}"/>"#,
                        dot.x,
                        dot.y,
                        STROKE_WIDTH / 2.0,
                    );
                }
                [first, rest @ ..] => {
                    let mut d = format!("M {} {}", first.x, first.y);
                    for p in rest {
                        let _ = write!(d, " L {} {}", p.x, p.y);
                    }
                    let _ = write!(
                        svg,
                        r#"<path d="{d}" fill="none" stroke="{STROKE_COLOR}" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                    );
                }
            }
        }

        svg.push_str("</svg>");
        svg
    }
}

impl SignatureSurface for SignaturePad {
    fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    fn export_svg_data_url(&self) -> Option<String> {
        if self.strokes.is_empty() {
            return None;
        }
        let encoded = Base64::encode_string(self.to_svg().as_bytes());
        Some(format!("{DATA_URL_PREFIX}{encoded}"))
    }
}
