//=========================================================================
// Geometry
//=========================================================================
//
// Plain value types shared by viewports, render surfaces, and events.
//
// Coordinate conventions:
// - Window/pixel space: origin top-left, +X right, +Y down
// - World space: unbounded, same axis orientation as pixel space
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::{Add, Mul, Neg, Sub};

//=== Vec2 ================================================================

/// 2D point or offset in world or pixel units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

//=== PixelSize ===========================================================

/// Extent of a render target in physical pixels.
///
/// Both axes are at least 1, so dividing by either is always defined.
/// Construct through [`PixelSize::clamped`] when the source may report zero
/// or negative dimensions (minimized windows, misbehaving platforms).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    /// Creates a size, clamping each axis to a minimum of one pixel.
    pub fn clamped(width: i64, height: i64) -> Self {
        let clamp = |v: i64| v.clamp(1, u32::MAX as i64) as u32;
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    /// Creates a size from unsigned dimensions (zero is clamped to one).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// The size as a floating point vector, used as world units under the
    /// 1:1 viewport policy.
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f64, self.height as f64)
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// The normalized rectangle covering a whole render target.
    pub const FULL: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Returns true when `other` lies entirely inside this rectangle.
    pub fn contains_rect(self, other: Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_size_has_minimum_of_one() {
        assert_eq!(PixelSize::clamped(0, -20), PixelSize { width: 1, height: 1 });
        assert_eq!(PixelSize::clamped(640, 0), PixelSize { width: 640, height: 1 });
        assert_eq!(PixelSize::new(0, 480), PixelSize { width: 1, height: 480 });
    }

    #[test]
    fn zero_size_reads_back_as_one_pixel() {
        let size = PixelSize::new(0, 0);
        assert_eq!(size.width(), 1);
        assert_eq!(size.height(), 1);
        assert_eq!(size.as_vec2(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn clamped_size_saturates_large_values() {
        let size = PixelSize::clamped(i64::MAX, 10);
        assert_eq!(size.width(), u32::MAX);
    }

    #[test]
    fn rect_containment_is_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(outer.contains_rect(outer));
        assert!(outer.contains_rect(Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(Rect::new(90.0, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
        assert_eq!(a * 0.5, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
    }
}
