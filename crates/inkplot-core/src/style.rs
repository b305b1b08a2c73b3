//! Paint attributes applied to shapes.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color names accepted without further parsing.
const COLOR_NAMES: &[&str] = &[
    "black",
    "white",
    "red",
    "green",
    "blue",
    "yellow",
    "purple",
    "orange",
    "gray",
    "darkred",
    "darkgreen",
    "darkblue",
    "none",
];

/// A validated SVG color value.
///
/// Accepts `"none"`, an allow-listed color name, hex strings of total
/// length 4 / 7 / 9 (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), and any string
/// starting with `rgb` or `hsl`. The functional forms are deliberately
/// not parsed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Validate and wrap a color string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::Color(value))
        }
    }

    /// The color exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        if COLOR_NAMES.contains(&value) {
            return true;
        }
        if value.starts_with('#') {
            return matches!(value.len(), 4 | 7 | 9);
        }
        value.starts_with("rgb") || value.starts_with("hsl")
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Paint attributes for a shape.
///
/// Immutable once constructed; "changing" a channel goes through the
/// `with_*` methods, which validate and return a fresh instance. Shapes
/// snapshot the canvas style at emission time, so later changes never
/// retroactively alter committed elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    fill: Color,
    stroke: Color,
    stroke_width: f64,
    opacity: f64,
}

impl Style {
    /// Create a style, validating fill, stroke, opacity, and stroke width
    /// in that order.
    pub fn new(
        fill: &str,
        stroke: &str,
        stroke_width: f64,
        opacity: f64,
    ) -> Result<Self, ValidationError> {
        let fill = Color::new(fill)?;
        let stroke = Color::new(stroke)?;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ValidationError::Opacity(opacity));
        }
        if stroke_width < 0.0 {
            return Err(ValidationError::StrokeWidth(stroke_width));
        }
        Ok(Self {
            fill,
            stroke,
            stroke_width,
            opacity,
        })
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Copy of this style with a different fill color.
    pub fn with_fill(&self, color: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            fill: Color::new(color)?,
            ..self.clone()
        })
    }

    /// Copy of this style with a different stroke color.
    pub fn with_stroke(&self, color: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            stroke: Color::new(color)?,
            ..self.clone()
        })
    }

    /// Copy of this style with a different stroke width.
    pub fn with_stroke_width(&self, stroke_width: f64) -> Result<Self, ValidationError> {
        if stroke_width < 0.0 {
            return Err(ValidationError::StrokeWidth(stroke_width));
        }
        Ok(Self {
            stroke_width,
            ..self.clone()
        })
    }

    /// Copy of this style with a different opacity.
    pub fn with_opacity(&self, opacity: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ValidationError::Opacity(opacity));
        }
        Ok(Self {
            opacity,
            ..self.clone()
        })
    }

    /// Encode as the SVG paint attribute string.
    pub fn to_svg_attrs(&self) -> String {
        format!(
            r#"fill="{}" stroke="{}" stroke-width="{}" opacity="{}""#,
            self.fill, self.stroke, self.stroke_width, self.opacity
        )
    }
}

impl Default for Style {
    /// No fill, black stroke, width 1, fully opaque.
    fn default() -> Self {
        Self {
            fill: Color("none".to_string()),
            stroke: Color("black".to_string()),
            stroke_width: 1.0,
            opacity: 1.0,
        }
    }
}
