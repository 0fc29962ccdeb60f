//! Small value types shared across the crate.

mod color;
mod vec2;

pub use color::Rgba;
pub use vec2::Vec2;
