//! Color types for quad fills.

mod color;

pub use color::Color;
