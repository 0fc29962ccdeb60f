//! CPU rasterizer.
//!
//! Responsibilities:
//! - own the frame's pixel buffer and the stateful draw color
//! - provide the draw calls primitives delegate to (points, rect fills,
//!   color-interpolated triangles, texture blits)
//! - stay presentation-agnostic: the device layer uploads the finished
//!   buffer, nothing here touches the GPU

mod canvas;
mod texture;

pub use canvas::{Canvas, Vertex};
pub use texture::Texture;
