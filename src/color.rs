//! Colors used to tint renderables, lights and the background.
//!
//! Components are `f32` in `[0.0, 1.0]`, sRGB-encoded, the way colors are
//! written in `0xRRGGBB` literals. The shader converts them to linear space
//! before lighting.
//!
//! # Example
//! ```
//! use cubescene::color::{self, Color};
//!
//! let teal = color::hex(0x44aa88);
//! assert_eq!(teal, Color::new(0x44 as f32 / 255.0, 0xaa as f32 / 255.0, 0x88 as f32 / 255.0, 1.0));
//! ```

pub use rgb::Rgba;

/// The color type used throughout cubescene. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Builds an opaque color from a `0xRRGGBB` literal.
///
/// Bits above the low 24 are ignored.
pub fn hex(rgb: u32) -> Color {
    let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
    Color::new(channel(16), channel(8), channel(0), 1.0)
}

/// Returns `color` as a `[r, g, b, a]` array, the layout uniforms expect.
#[inline]
pub fn to_array(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Red (255, 0, 0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Lime (0, 255, 0) - CSS "lime", pure green
pub const LIME: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Blue (0, 0, 255)
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Sea green (0x44aa88), the tint of the first demo cube.
pub const SEA_GREEN: Color = Color::new(0.26666668, 0.6666667, 0.53333336, 1.0);

/// Purple (0x8844aa), the tint of the second demo cube.
pub const PURPLE: Color = Color::new(0.53333336, 0.26666668, 0.6666667, 1.0);

/// Ochre (0xaa8844), the tint of the third demo cube.
pub const OCHRE: Color = Color::new(0.6666667, 0.53333336, 0.26666668, 1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hex_decodes_channels() {
        let c = hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 128.0 / 255.0);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_ignores_high_bits() {
        assert_eq!(hex(0xff00_0000), BLACK);
        assert_eq!(hex(0xffffff), WHITE);
    }

    #[test]
    fn demo_palette_matches_hex_literals() {
        for (constant, literal) in [(SEA_GREEN, 0x44aa88), (PURPLE, 0x8844aa), (OCHRE, 0xaa8844)] {
            let decoded = hex(literal);
            assert_relative_eq!(constant.r, decoded.r);
            assert_relative_eq!(constant.g, decoded.g);
            assert_relative_eq!(constant.b, decoded.b);
        }
    }
}
