//! WebGPU rendering module
//!
//! CPU-side tessellation of the frame into colored triangles, one pipeline,
//! one pass. Thin wrapper around wgpu; nothing here affects gameplay.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
