use glam::Vec4;

/// Converts a `0xRRGGBB` sRGB colour to linear RGBA for an sRGB surface.
pub fn srgb(hex: u32, alpha: f32) -> Vec4 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec4::new(channel(16), channel(8), channel(0), alpha)
}

pub const SCREEN_BACKGROUND: u32 = 0x050914;
pub const GRID_DOT: u32 = 0x475569;
pub const AXIS: u32 = 0x1e293b;
pub const NATIVE_FRAME: u32 = 0x3b82f6;
pub const NATIVE_ONLY_FRAME: u32 = 0x2563eb;
pub const GENERATED_FRAME: u32 = 0xfacc15;
pub const BADGE_LIGHT: u32 = 0xffffff;
pub const BADGE_DARK: u32 = 0x000000;

pub fn screen_background() -> wgpu::Color {
    let c = srgb(SCREEN_BACKGROUND, 1.0);
    wgpu::Color {
        r: c.x as f64,
        g: c.y as f64,
        b: c.z as f64,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_map_exactly() {
        assert_eq!(srgb(0x000000, 1.0), Vec4::new(0.0, 0.0, 0.0, 1.0));
        let white = srgb(0xffffff, 0.5);
        assert!((white.x - 1.0).abs() < 1e-6);
        assert_eq!(white.w, 0.5);
    }

    #[test]
    fn midtones_are_darker_in_linear_space() {
        let grey = srgb(0x808080, 1.0);
        assert!(grey.x > 0.2 && grey.x < 0.23, "got {}", grey.x);
    }
}
