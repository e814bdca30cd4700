//! Colors and ARGB8888 packing.
//!
//! Pixels in a [`Canvas`](crate::canvas::Canvas) are stored as packed
//! `0xAARRGGBB` words. [`Color`] holds straight (non-premultiplied) channels
//! in `[0, 1]` and knows how to blend itself over a packed destination.

/// A straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_argb(self) -> u32 {
        pack_color(self.r, self.g, self.b, self.a)
    }

    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        let (r, g, b) = unpack_color(argb);
        Self { r, g, b, a }
    }

    /// Straight alpha-over: `out = src·a + dst·(1 − a)`.
    ///
    /// The destination is treated as opaque; the result is always opaque.
    pub fn blend_over(self, dst: u32) -> u32 {
        let a = self.a.clamp(0.0, 1.0);
        if a >= 1.0 {
            return pack_color(self.r, self.g, self.b, 1.0);
        }
        let (dr, dg, db) = unpack_color(dst);
        let (r, g, b) = lerp_color((dr, dg, db), (self.r, self.g, self.b), a);
        pack_color(r, g, b, 1.0)
    }
}

/// Packs float channels into `0xAARRGGBB`, clamping each to `[0, 1]`.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Unpacks the RGB channels of `0xAARRGGBB` into `[0, 1]` floats.
pub fn unpack_color(argb: u32) -> (f32, f32, f32) {
    (
        ((argb >> 16) & 0xFF) as f32 / 255.0,
        ((argb >> 8) & 0xFF) as f32 / 255.0,
        (argb & 0xFF) as f32 / 255.0,
    )
}

/// Linear interpolation between two RGB triples.
pub fn lerp_color(from: (f32, f32, f32), to: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
        from.2 + (to.2 - from.2) * t,
    )
}

// Scene palette
pub const SKY: Color = Color::rgb(0.08, 0.12, 0.25);
pub const GROUND: Color = Color::rgb(0.15, 0.35, 0.15);
pub const GRASS: Color = Color::rgb(0.3, 0.6, 0.2);
pub const CLOUD: Color = Color::rgba(0.95, 0.95, 1.0, 0.85);
pub const AIRPLANE_BODY: Color = Color::rgb(0.9, 0.9, 0.9);
pub const AIRPLANE_ACCENT: Color = Color::rgb(1.0, 0.3, 0.1);
pub const AIRPLANE_WING: Color = Color::rgb(0.2, 0.6, 1.0);
pub const COCKPIT: Color = Color::rgba(0.3, 0.7, 0.9, 0.9);
pub const MISSILE: Color = Color::rgb(0.7, 0.1, 0.1);
pub const FLAME: Color = Color::rgba(1.0, 0.6, 0.0, 0.8);
pub const FUEL: Color = Color::rgb(0.1, 0.9, 0.3);
pub const OUTLINE: Color = Color::rgb(0.1, 0.1, 0.1);
