//! 2D math carrier types.
//!
//! Convention:
//! - world space is +Y up (clip-space y passes through unflipped)
//! - angles are radians

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
