//! Form rendering module
//!
//! - `field_renderer`: field rendering utilities
//! - `service_form`: the service record form and the confirmation panel
//! - `signature_pad`: signature canvas

mod field_renderer;
mod service_form;
mod signature_pad;

pub use service_form::{draw_service_form, draw_success};
