//! Integer pixel coordinates and pixel collections.
//!
//! Rasterizers produce two kinds of output:
//!
//! - Stroked shapes return a plain `Vec<Pixel>`. Adjacent symmetric branches
//!   may emit the same pixel twice; painting is idempotent so this is harmless.
//! - Filled shapes return a [`PixelSet`], which never holds the same `(x, y)`
//!   twice.

use std::collections::HashSet;

use crate::math::vec2::Vec2;

/// A rasterized point on the integer pixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncates a floating point position toward zero.
    pub fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }

    /// Packs both coordinates into a single `u64` key (x in the high word).
    #[inline]
    pub fn key(&self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A duplicate-free collection of pixels that remembers insertion order.
///
/// Membership is tracked through [`Pixel::key`], so lookups never hash a
/// tuple. Iteration yields pixels in the order they were first inserted.
#[derive(Clone, Debug, Default)]
pub struct PixelSet {
    pixels: Vec<Pixel>,
    seen: HashSet<u64>,
}

impl PixelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pixel. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, pixel: Pixel) -> bool {
        if self.seen.insert(pixel.key()) {
            self.pixels.push(pixel);
            true
        } else {
            false
        }
    }

    /// Inserts the inclusive horizontal run `x0..=x1` on row `y`.
    ///
    /// The endpoints may be given in either order.
    pub fn insert_span(&mut self, x0: i32, x1: i32, y: i32) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        for x in lo..=hi {
            self.insert(Pixel::new(x, y));
        }
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        self.seen.contains(&pixel.key())
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_vec(self) -> Vec<Pixel> {
        self.pixels
    }
}

impl PartialEq for PixelSet {
    /// Two sets are equal when they hold the same pixels, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for PixelSet {}

impl Extend<Pixel> for PixelSet {
    fn extend<I: IntoIterator<Item = Pixel>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<Pixel> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        let mut set = PixelSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for PixelSet {
    type Item = Pixel;
    type IntoIter = std::vec::IntoIter<Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_distinguishes_negative_coordinates() {
        let keys: HashSet<u64> = [(-1, 0), (0, -1), (-1, -1), (1, 0), (0, 1)]
            .into_iter()
            .map(|p| Pixel::from(p).key())
            .collect();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = PixelSet::new();
        assert!(set.insert(Pixel::new(3, 4)));
        assert!(!set.insert(Pixel::new(3, 4)));
        assert!(set.insert(Pixel::new(4, 3)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[Pixel::new(3, 4), Pixel::new(4, 3)]);
    }

    #[test]
    fn test_insert_span_accepts_reversed_endpoints() {
        let mut set = PixelSet::new();
        set.insert_span(5, 2, 7);
        set.insert_span(3, 4, 7);
        assert_eq!(set.len(), 4);
        assert!((2..=5).all(|x| set.contains(Pixel::new(x, 7))));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: PixelSet = [Pixel::new(0, 0), Pixel::new(1, 1)].into_iter().collect();
        let b: PixelSet = [Pixel::new(1, 1), Pixel::new(0, 0)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_vec2_truncates_toward_zero() {
        assert_eq!(Pixel::from_vec2(Vec2::new(2.9, -2.9)), Pixel::new(2, -2));
    }
}
