use std::fmt;

pub use kurbo::{Point, Rect};

use crate::foundation::math::Num;

/// SVG `viewBox` of a shape in its local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width in user units.
    pub width: f64,
    /// Height in user units.
    pub height: f64,
}

impl ViewBox {
    /// Create a view box anchored at the origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    /// The view box as a rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }

    /// Return `true` when `r` lies entirely inside the view box.
    pub fn contains_rect(self, r: Rect) -> bool {
        let vb = self.rect();
        r.x0 >= vb.x0 && r.y0 >= vb.y0 && r.x1 <= vb.x1 && r.y1 <= vb.y1
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            Num(self.min_x),
            Num(self.min_y),
            Num(self.width),
            Num(self.height)
        )
    }
}

/// Ellipse in a shape's local coordinates that anchors every pattern overlay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatternArea {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
}

impl PatternArea {
    /// Create a pattern area from center and radii.
    pub const fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Ellipse center.
    pub fn center(self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Axis-aligned bounds of the ellipse.
    pub fn bounding_box(self) -> Rect {
        Rect::new(
            self.cx - self.rx,
            self.cy - self.ry,
            self.cx + self.rx,
            self.cy + self.ry,
        )
    }

    /// Return `true` when `p` is inside or on the ellipse.
    pub fn contains(self, p: Point) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let nx = (p.x - self.cx) / self.rx;
        let ny = (p.y - self.cy) / self.ry;
        nx * nx + ny * ny <= 1.0 + 1e-9
    }

    /// Point at `angle` radians, `factor` of the way from the center to the rim.
    pub fn polar(self, angle: f64, factor: f64) -> Point {
        Point::new(
            self.cx + angle.cos() * self.rx * factor,
            self.cy + angle.sin() * self.ry * factor,
        )
    }

    /// Smaller of the two radii.
    pub fn min_radius(self) -> f64 {
        self.rx.min(self.ry)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
