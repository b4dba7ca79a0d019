use super::Quad;

/// Ordered quad collection for one frame.
///
/// The renderer uploads the list as-is: instance index in the draw call equals
/// insertion order. With the opaque pipeline (no depth, no blending), later
/// quads paint over earlier ones where they overlap.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct QuadList {
    quads: Vec<Quad>,
}

impl QuadList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a quad and returns the instance index it will draw under.
    #[inline]
    pub fn push(&mut self, quad: Quad) -> u32 {
        let index = self.quads.len() as u32;
        self.quads.push(quad);
        index
    }

    /// Clears recorded quads. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.quads.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Quads in instance order, ready for upload.
    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }
}
