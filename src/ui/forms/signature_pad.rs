//! Signature pad rendering on a braille canvas

use super::field_renderer::field_block;
use crate::signature::{SignaturePad, SignatureSurface};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    Frame,
};

/// Draw one signature pad. Canvas y grows upward, pad y grows downward.
pub fn draw_signature_pad(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    pad: &SignaturePad,
    is_active: bool,
    error: Option<&str>,
) {
    let width = pad.width();
    let height = pad.height();
    let flip = |y: f64| height - y;

    let canvas = Canvas::default()
        .block(field_block(label, is_active, error))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            if pad.is_empty() {
                ctx.print(
                    width * 0.25,
                    height * 0.5,
                    Line::from(Span::styled(
                        "Sign here with the mouse",
                        Style::default().fg(Color::DarkGray),
                    )),
                );
                return;
            }
            for stroke in pad.strokes() {
                match stroke.as_slice() {
                    [] => {}
                    [dot] => ctx.draw(&Points {
                        coords: &[(dot.x, flip(dot.y))],
                        color: Color::White,
                    }),
                    points => {
                        for pair in points.windows(2) {
                            ctx.draw(&CanvasLine {
                                x1: pair[0].x,
                                y1: flip(pair[0].y),
                                x2: pair[1].x,
                                y2: flip(pair[1].y),
                                color: Color::White,
                            });
                        }
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}
