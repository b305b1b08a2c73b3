//! Shape definitions for the canvas.

mod ellipse;
mod rectangle;

pub use ellipse::Ellipse;
pub use rectangle::Rectangle;

use crate::style::Style;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Enum wrapper for all shape types.
///
/// Circles are not a separate variant: [`Ellipse::circle`] builds an
/// ellipse with equal radii and no rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
}

impl Shape {
    /// Render as a single self-closing SVG element.
    pub fn to_svg(&self) -> String {
        match self {
            Shape::Ellipse(s) => s.to_svg(),
            Shape::Rectangle(s) => s.to_svg(),
        }
    }

    /// Axis-aligned bounding box (ignores rotation).
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Ellipse(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
        }
    }

    /// The style snapshot taken when the shape was emitted.
    pub fn style(&self) -> &Style {
        match self {
            Shape::Ellipse(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
        }
    }
}
