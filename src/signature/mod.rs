//! Signature capture
//!
//! - `traits`: the capture contract the form controller relies on
//! - `pad`: stroke recording and SVG export for the terminal canvas

mod pad;
mod traits;

pub use pad::{PadPoint, SignaturePad, DEFAULT_PAD_HEIGHT, DEFAULT_PAD_WIDTH};
pub use traits::SignatureSurface;

#[cfg(test)]
pub use traits::MockSignatureSurface;
