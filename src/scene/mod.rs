//! Host-facing frame descriptors.
//!
//! Responsibilities:
//! - describe what to draw: `Quad`, ordered in a `QuadList`
//! - describe how to view it: `Camera`
//!
//! Nothing here touches the GPU; `render` consumes these by reference and
//! `transform` mirrors their shader-side math on the CPU.

mod camera;
mod list;
mod quad;

pub use camera::Camera;
pub use list::QuadList;
pub use quad::Quad;
