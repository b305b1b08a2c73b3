//! Ellipse shape (circles included).

use crate::error::ValidationError;
use crate::style::Style;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An ellipse, centered at `center` and axis-aligned before rotation.
///
/// Stored as radii: construction takes a full width and height and
/// halves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point,
    radius_x: f64,
    radius_y: f64,
    /// Rotation in degrees around the center.
    rotation: f64,
    style: Style,
}

impl Ellipse {
    /// Create a new ellipse. Width and height must be strictly positive.
    pub fn new(
        center: Point,
        width: f64,
        height: f64,
        rotation: f64,
        style: Style,
    ) -> Result<Self, ValidationError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ValidationError::ShapeSize("ellipse"));
        }
        Ok(Self {
            center,
            radius_x: width / 2.0,
            radius_y: height / 2.0,
            rotation,
            style,
        })
    }

    /// Create a circle: an ellipse with equal radii and no rotation.
    pub fn circle(center: Point, diameter: f64, style: Style) -> Result<Self, ValidationError> {
        Self::new(center, diameter, diameter, 0.0, style)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    /// Rotation in degrees around the center.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Axis-aligned bounding box (ignores rotation).
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    /// Render as a self-closing `<ellipse/>` element. The rotate transform
    /// is only emitted for a non-zero rotation.
    pub fn to_svg(&self) -> String {
        let transform = if self.rotation != 0.0 {
            format!(
                r#" transform="rotate({} {} {})""#,
                self.rotation, self.center.x, self.center.y
            )
        } else {
            String::new()
        };
        format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}{}/>"#,
            self.center.x,
            self.center.y,
            self.radius_x,
            self.radius_y,
            self.style.to_svg_attrs(),
            transform
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipse_creation() {
        let ellipse =
            Ellipse::new(Point::new(50.0, 50.0), 60.0, 40.0, 0.0, Style::default()).unwrap();
        assert!((ellipse.center().x - 50.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_x() - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_has_equal_radii() {
        let circle = Ellipse::circle(Point::new(0.0, 0.0), 20.0, Style::default()).unwrap();
        assert!((circle.radius_x() - circle.radius_y()).abs() < f64::EPSILON);
        assert!((circle.rotation()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let result = Ellipse::new(Point::ZERO, 0.0, 10.0, 0.0, Style::default());
        assert_eq!(result, Err(ValidationError::ShapeSize("ellipse")));

        let result = Ellipse::new(Point::ZERO, 10.0, -5.0, 0.0, Style::default());
        assert_eq!(result, Err(ValidationError::ShapeSize("ellipse")));
    }

    #[test]
    fn test_to_svg_no_rotation() {
        let ellipse =
            Ellipse::new(Point::new(50.0, 50.0), 20.0, 20.0, 0.0, Style::default()).unwrap();
        assert_eq!(
            ellipse.to_svg(),
            r#"<ellipse cx="50" cy="50" rx="10" ry="10" fill="none" stroke="black" stroke-width="1" opacity="1"/>"#
        );
    }

    #[test]
    fn test_to_svg_with_rotation() {
        let ellipse =
            Ellipse::new(Point::new(10.0, 20.0), 40.0, 20.0, 45.0, Style::default()).unwrap();
        let svg = ellipse.to_svg();
        assert!(svg.ends_with(r#" transform="rotate(45 10 20)"/>"#), "{svg}");
    }

    #[test]
    fn test_bounds() {
        let ellipse =
            Ellipse::new(Point::new(50.0, 50.0), 60.0, 40.0, 0.0, Style::default()).unwrap();
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
