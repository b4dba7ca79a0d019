//! GPU side of the quad stage.
//!
//! The renderer owns its pipeline and buffers and records into a render pass
//! the host has already opened. Per-frame flow:
//! - `QuadRenderer::prepare` checks the frame contract and uploads the camera
//!   uniform plus the count-prefixed quad storage buffer
//! - `QuadRenderer::draw` records one instanced draw for all quads
//!
//! Binding contract (stable; the shader depends on it byte for byte):
//! - group 0, binding 0: camera uniform, vertex stage
//! - group 1, binding 0: read-only quad storage buffer, vertex stage

mod ctx;
mod quad;

pub use ctx::RenderCtx;
pub use quad::QuadRenderer;
