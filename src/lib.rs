//! Quadrille: instanced 2D quad rendering on wgpu.
//!
//! The crate owns the quad shader stage and its host-side plumbing: a camera
//! uniform, a storage buffer of per-instance quad records, and the pipeline
//! that draws all of them in a single instanced call. It does not own a
//! window, surface, or event loop; the host hands it a device/queue and an
//! open render pass.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod transform;
