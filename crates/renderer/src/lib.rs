pub mod hud;
pub mod layout;
pub mod palette;
pub mod quads;

pub use hud::{Accent, HudText, PlayGlyph};
pub use layout::{QuadInstance, SceneLayout};

use quads::QuadPipeline;

pub struct Renderer {
    quads: QuadPipeline,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub fn new(device: &wgpu::Device, surface_config: &wgpu::SurfaceConfiguration) -> Self {
        Self {
            quads: QuadPipeline::new(device, surface_config.format),
            clear_color: palette::screen_background(),
        }
    }

    /// Draws the demo screen into `surface_view`, clearing it first.
    pub fn render_frame(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        queue: &wgpu::Queue,
        layout: &SceneLayout,
    ) {
        let count = self
            .quads
            .upload(queue, layout.viewport.to_array(), &layout.quads);
        self.quads.encode(encoder, surface_view, self.clear_color, count);
    }
}
