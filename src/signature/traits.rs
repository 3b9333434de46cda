//! Trait abstraction for signature capture to enable mocking in tests

/// A surface the signer draws on.
///
/// The form never inspects strokes directly; it only asks whether anything
/// was drawn, clears the surface, or exports the drawing.
#[cfg_attr(test, mockall::automock)]
pub trait SignatureSurface: Send {
    /// True when no stroke has been drawn
    fn is_empty(&self) -> bool;

    /// Remove every stroke
    fn clear(&mut self);

    /// Export the drawing as an SVG data URL, or `None` when empty
    fn export_svg_data_url(&self) -> Option<String>;
}
