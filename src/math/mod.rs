//! Floating point geometry used before rasterization.

pub mod mat3;
pub mod vec2;

pub use mat3::Mat3;
pub use vec2::Vec2;
