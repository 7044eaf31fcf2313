//! Geometry
//!
//! Points in canvas space and the transform from canvas space to the
//! coordinates the arrow layer draws in.

use std::ops::{Add, Sub};

/// A 2D point (or offset) in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Maps canvas coordinates onto the drawing surface.
///
/// The identity transform is used when the arrow layer shares the card
/// layer's origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewTransform {
    pub offset: Point,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform { offset: Point::ORIGIN };

    pub fn translate(offset: Point) -> Self {
        Self { offset }
    }

    pub fn apply(&self, point: Point) -> Point {
        point + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(ViewTransform::IDENTITY.apply(p), p);
        assert_eq!(ViewTransform::default(), ViewTransform::IDENTITY);
    }

    #[test]
    fn test_translate() {
        let t = ViewTransform::translate(Point::new(10.0, 20.0));
        assert_eq!(t.apply(Point::new(1.0, 2.0)), Point::new(11.0, 22.0));
        assert_eq!(Point::new(5.0, 5.0) - Point::new(2.0, 1.0), Point::new(3.0, 4.0));
    }
}
