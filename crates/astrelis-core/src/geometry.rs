//! Plain geometry value types shared by the designer crates.
//!
//! The types are generic so hosts can pick their unit type, but everything in
//! the designer itself works in `f64` designer units.

use std::ops::{Add, Mul};

use crate::math::{DAffine2, DVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

impl<T: Add<Output = T>> Add for Size<T> {
    type Output = Size<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Size {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl Size<f64> {
    pub const ZERO: Self = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Component-wise scale by independent factors.
    pub fn scale(self, width_factor: f64, height_factor: f64) -> Self {
        Size {
            width: self.width * width_factor,
            height: self.height * height_factor,
        }
    }

    /// Replace negative (or NaN) components with zero.
    pub fn clamp_non_negative(self) -> Self {
        Size {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }

    pub fn is_non_negative(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl Pos<f64> {
    pub const ORIGIN: Self = Pos { x: 0.0, y: 0.0 };

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec2(v: DVec2) -> Self {
        Pos { x: v.x, y: v.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Copy> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Pos<T>, size: Size<T>) -> Self {
        Rect {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn position(&self) -> Pos<T> {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl Rect<f64> {
    /// A rectangle at the origin covering `size`.
    pub fn from_size(size: Size<f64>) -> Self {
        Rect::from_pos_size(Pos::ORIGIN, size)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Pos<f64>) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Rect {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::new(self.x, self.y),
            DVec2::new(self.right(), self.y),
            DVec2::new(self.right(), self.bottom()),
            DVec2::new(self.x, self.bottom()),
        ]
    }

    /// Axis-aligned bounds of this rectangle after `transform`.
    pub fn transformed_bounds(&self, transform: &DAffine2) -> Self {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for corner in self.corners() {
            let p = transform.transform_point2(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_add_and_scale() {
        let a = Size::new(10.0, 4.0);
        let b = Size::new(1.0, 2.0);
        assert_eq!(a + b, Size::new(11.0, 6.0));
        assert_eq!(a.scale(0.5, 2.0), Size::new(5.0, 8.0));
        assert_eq!(a * 2.0, Size::new(20.0, 8.0));
    }

    #[test]
    fn test_clamp_non_negative() {
        let s = Size::new(-3.0, 7.0).clamp_non_negative();
        assert_eq!(s, Size::new(0.0, 7.0));
        assert!(s.is_non_negative());
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(r.contains(Pos::new(5.0, 5.0)));
        assert!(r.contains(Pos::new(15.0, 15.0)));
        assert!(!r.contains(Pos::new(15.1, 10.0)));
        assert!(r.inflate(1.0).contains(Pos::new(15.5, 10.0)));
    }

    #[test]
    fn test_transformed_bounds_rotation() {
        let r = Rect::from_size(Size::new(10.0, 10.0));
        let rotate = DAffine2::from_angle(std::f64::consts::FRAC_PI_2);
        let bounds = r.transformed_bounds(&rotate);
        assert!((bounds.x + 10.0).abs() < 1e-9);
        assert!(bounds.y.abs() < 1e-9);
        assert!((bounds.width - 10.0).abs() < 1e-9);
        assert!((bounds.height - 10.0).abs() < 1e-9);
    }
}
