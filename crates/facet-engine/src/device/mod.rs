//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - uploading the finished canvas and presenting it

mod blit;
mod gpu;

pub use blit::FramePresenter;
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
