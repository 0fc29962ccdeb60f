//! Facet engine crate.
//!
//! Owns the platform + presentation pieces used by the demo binary: a CPU
//! rasterizer, the primitive/scene model, and the winit/wgpu runtime that
//! puts a single rendered frame on screen.

pub mod device;
pub mod window;
pub mod input;

pub mod logging;
pub mod coords;
pub mod raster;
pub mod scene;
pub mod text;
