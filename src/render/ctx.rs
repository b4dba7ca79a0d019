use crate::coords::Viewport;

/// Renderer-facing per-frame context (device/queue + viewport).
///
/// This is intentionally small and stable; hosts rebuild it every frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue, viewport: Viewport) -> Self {
        Self {
            device,
            queue,
            viewport,
        }
    }
}
