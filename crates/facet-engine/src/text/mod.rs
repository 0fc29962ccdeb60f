//! Text handling: font ownership and one-line label rasterization.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
