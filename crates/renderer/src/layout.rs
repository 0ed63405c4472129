use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};
use types::{DemoConfig, DisplayState};

use crate::palette::{self, srgb};

/// Marker edge length in CSS pixels.
pub const MARKER_SIZE: f32 = 56.0;
pub const MARKER_RADIUS: f32 = 12.0;
pub const BADGE_SIZE: f32 = 12.0;
pub const GRID_SPACING: f32 = 20.0;

/// How the fragment shader fills a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadKind {
    Fill = 0,
    DashedOutline = 1,
    DotGrid = 2,
}

/// One instanced quad, laid out for the vertex buffer.
/// `rect` is x, y, width, height in physical pixels from the top-left corner.
/// `style` is corner radius, outline width, dash length (or dot spacing), kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub rect: [f32; 4],
    pub color: [f32; 4],
    pub style: [f32; 4],
}

impl QuadInstance {
    fn new(min: Vec2, size: Vec2, color: Vec4, radius: f32, outline: f32, dash: f32, kind: QuadKind) -> Self {
        Self {
            rect: [min.x, min.y, size.x, size.y],
            color: color.to_array(),
            style: [radius, outline, dash, kind as u32 as f32],
        }
    }

    pub fn kind(&self) -> f32 {
        self.style[3]
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.rect[0], self.rect[1])
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.rect[2], self.rect[3])
    }
}

/// Everything drawn inside the demo screen for one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub viewport: Vec2,
    pub quads: Vec<QuadInstance>,
    /// Index of the main marker in `quads`.
    pub marker: usize,
    /// Index of the ghost marker, present only with frame generation on.
    pub ghost: Option<usize>,
}

impl SceneLayout {
    /// Lays out the screen for `display`. `viewport` is in physical pixels and
    /// `scale` is the device pixel ratio applied to CSS-pixel sizes.
    pub fn build(display: &DisplayState, config: &DemoConfig, viewport: Vec2, scale: f32) -> Self {
        let mut quads = Vec::with_capacity(6);
        let marker_size = Vec2::splat(MARKER_SIZE * scale);
        let mid_y = viewport.y * 0.5;

        quads.push(QuadInstance::new(
            Vec2::ZERO,
            viewport,
            srgb(palette::GRID_DOT, 0.2),
            0.0,
            scale,
            GRID_SPACING * scale,
            QuadKind::DotGrid,
        ));

        let axis_height = scale.max(1.0);
        quads.push(QuadInstance::new(
            Vec2::new(0.0, mid_y - axis_height * 0.5),
            Vec2::new(viewport.x, axis_height),
            srgb(palette::AXIS, 0.5),
            0.0,
            0.0,
            0.0,
            QuadKind::Fill,
        ));

        let marker_min = |position: f64| {
            Vec2::new(position as f32 / 100.0 * viewport.x, mid_y - marker_size.y * 0.5)
        };

        let ghost = if config.frame_gen_enabled {
            quads.push(QuadInstance::new(
                marker_min(display.ghost_position),
                marker_size,
                srgb(palette::NATIVE_FRAME, 0.4),
                MARKER_RADIUS * scale,
                2.0 * scale,
                6.0 * scale,
                QuadKind::DashedOutline,
            ));
            Some(quads.len() - 1)
        } else {
            None
        };

        let generated = config.frame_gen_enabled && display.is_generated_frame;
        let marker_color = match (config.frame_gen_enabled, generated) {
            (true, true) => palette::GENERATED_FRAME,
            (true, false) => palette::NATIVE_FRAME,
            (false, _) => palette::NATIVE_ONLY_FRAME,
        };
        let min = marker_min(display.display_position);
        quads.push(QuadInstance::new(
            min,
            marker_size,
            srgb(marker_color, 1.0),
            MARKER_RADIUS * scale,
            0.0,
            0.0,
            QuadKind::Fill,
        ));
        let marker = quads.len() - 1;

        // Badge: light dot on native frames, dark dot on generated ones
        let badge = Vec2::splat(BADGE_SIZE * scale);
        let badge_min = min + (marker_size - badge) * Vec2::new(0.5, 0.35);
        let (badge_color, badge_alpha) = if generated {
            (palette::BADGE_DARK, 0.7)
        } else {
            (palette::BADGE_LIGHT, 1.0)
        };
        quads.push(QuadInstance::new(
            badge_min,
            badge,
            srgb(badge_color, badge_alpha),
            badge.x * 0.5,
            0.0,
            0.0,
            QuadKind::Fill,
        ));

        Self {
            viewport,
            quads,
            marker,
            ghost,
        }
    }

    pub fn marker(&self) -> &QuadInstance {
        &self.quads[self.marker]
    }

    pub fn ghost(&self) -> Option<&QuadInstance> {
        self.ghost.map(|i| &self.quads[i])
    }
}
