//! Scene model.
//!
//! Responsibilities:
//! - define the closed set of drawable primitives
//! - keep the frame's primitive list in insertion order (= paint order)
//! - drive the one-shot render + run lifecycle

mod primitive;
mod scene;

pub use primitive::{Circle, Primitive, Rectangle, Triangle};
pub use scene::{Scene, SceneConfig};
