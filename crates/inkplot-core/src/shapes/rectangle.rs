//! Rectangle shape.

use crate::error::ValidationError;
use crate::style::Style;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner.
/// Rotation is not supported for rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    position: Point,
    width: f64,
    height: f64,
    style: Style,
}

impl Rectangle {
    /// Create a new rectangle. Width and height must be strictly positive.
    pub fn new(
        position: Point,
        width: f64,
        height: f64,
        style: Style,
    ) -> Result<Self, ValidationError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ValidationError::ShapeSize("rectangle"));
        }
        Ok(Self {
            position,
            width,
            height,
            style,
        })
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Render as a self-closing `<rect/>` element.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            self.position.x,
            self.position.y,
            self.width,
            self.height,
            self.style.to_svg_attrs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0, Style::default()).unwrap();
        assert!((rect.position().x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position().y - 20.0).abs() < f64::EPSILON);
        assert!((rect.width() - 100.0).abs() < f64::EPSILON);
        assert!((rect.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let result = Rectangle::new(Point::ZERO, 0.0, 50.0, Style::default());
        assert_eq!(result, Err(ValidationError::ShapeSize("rectangle")));

        let result = Rectangle::new(Point::ZERO, 100.0, -1.0, Style::default());
        assert_eq!(result, Err(ValidationError::ShapeSize("rectangle")));
    }

    #[test]
    fn test_to_svg() {
        let style = Style::new("white", "none", 1.0, 1.0).unwrap();
        let rect = Rectangle::new(Point::ZERO, 100.0, 100.0, style).unwrap();
        assert_eq!(
            rect.to_svg(),
            r#"<rect x="0" y="0" width="100" height="100" fill="white" stroke="none" stroke-width="1" opacity="1"/>"#
        );
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0, Style::default()).unwrap();
        let bounds = rect.bounds();
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
