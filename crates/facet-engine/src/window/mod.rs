//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the scene and
//! the presentation layer.

mod runtime;

pub use runtime::Runtime;
