//! Canvas document: paint state, element accumulation, SVG output.

use crate::error::{SvgError, SvgResult, ValidationError};
use crate::shapes::{Ellipse, Rectangle, Shape};
use crate::style::Style;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Maximum canvas edge length, in user units.
pub const MAX_DIMENSION: u32 = 16384;

/// A committed entry in the document. Elements draw in append order, so
/// later entries paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Shape(Shape),
    /// A pre-rendered `<path/>` fragment from the begin/vertex/end protocol.
    RawPath(String),
}

/// The document being built.
///
/// Holds the fixed canvas dimensions, the committed elements in paint
/// order, the current paint style (snapshotted by every shape-emitting
/// call), and the in-progress path buffer. The buffer doubles as the
/// path-protocol state machine: `None` means idle, `Some` means a shape
/// is being built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    width: u32,
    height: u32,
    elements: Vec<Element>,
    style: Style,
    #[serde(skip)]
    current_path: Option<Vec<Point>>,
}

impl Canvas {
    /// Create a canvas. Both dimensions must be positive and at most
    /// [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::CanvasSize { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ValidationError::CanvasTooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self {
            width,
            height,
            elements: Vec::new(),
            style: Style::default(),
            current_path: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Committed elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of committed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The current paint style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Paint a full-canvas background rectangle. The background always
    /// lands at element index 0, underneath everything already committed.
    pub fn background(&mut self, color: &str) -> SvgResult<()> {
        let style = Style::new(color, "none", 1.0, 1.0)
            .map_err(|_| ValidationError::BackgroundColor(color.to_string()))?;
        let rect = Rectangle::new(
            Point::ZERO,
            f64::from(self.width),
            f64::from(self.height),
            style,
        )?;
        self.elements.insert(0, Element::Shape(Shape::Rectangle(rect)));
        Ok(())
    }

    /// Set the fill color for subsequent shapes.
    pub fn fill(&mut self, color: &str) -> SvgResult<()> {
        self.style = self
            .style
            .with_fill(color)
            .map_err(|_| ValidationError::FillColor(color.to_string()))?;
        Ok(())
    }

    /// Set the stroke color for subsequent shapes.
    pub fn stroke(&mut self, color: &str) -> SvgResult<()> {
        self.style = self
            .style
            .with_stroke(color)
            .map_err(|_| ValidationError::StrokeColor(color.to_string()))?;
        Ok(())
    }

    /// Set the stroke width for subsequent shapes.
    pub fn stroke_width(&mut self, width: f64) -> SvgResult<()> {
        self.style = self.style.with_stroke_width(width)?;
        Ok(())
    }

    /// Set the opacity for subsequent shapes.
    pub fn opacity(&mut self, opacity: f64) -> SvgResult<()> {
        self.style = self.style.with_opacity(opacity)?;
        Ok(())
    }

    /// Draw a circle centered at `(x, y)` with the current style.
    pub fn circle(&mut self, x: f64, y: f64, diameter: f64) -> SvgResult<Ellipse> {
        let circle = Ellipse::circle(Point::new(x, y), diameter, self.style.clone())?;
        self.elements.push(Element::Shape(Shape::Ellipse(circle.clone())));
        Ok(circle)
    }

    /// Draw an ellipse centered at `(x, y)` with the current style.
    /// `rotation` is in degrees around the center; pass 0 for none.
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    ) -> SvgResult<Ellipse> {
        let ellipse = Ellipse::new(Point::new(x, y), width, height, rotation, self.style.clone())?;
        self.elements.push(Element::Shape(Shape::Ellipse(ellipse.clone())));
        Ok(ellipse)
    }

    /// Draw a rectangle with top-left corner `(x, y)` and the current style.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> SvgResult<Rectangle> {
        let rect = Rectangle::new(Point::new(x, y), width, height, self.style.clone())?;
        self.elements.push(Element::Shape(Shape::Rectangle(rect.clone())));
        Ok(rect)
    }

    /// Start buffering a new path. Fails if a path is already in progress.
    pub fn begin_shape(&mut self) -> SvgResult<()> {
        if self.current_path.is_some() {
            return Err(SvgError::ShapeInProgress);
        }
        self.current_path = Some(Vec::new());
        Ok(())
    }

    /// Append a point to the in-progress path.
    pub fn vertex(&mut self, x: f64, y: f64) -> SvgResult<()> {
        match &mut self.current_path {
            Some(points) => {
                points.push(Point::new(x, y));
                Ok(())
            }
            None => Err(SvgError::VertexOutsideShape),
        }
    }

    /// Commit the buffered path as a `<path/>` element with the current
    /// style, optionally closing it with `Z`. Requires at least 2 buffered
    /// vertices; on failure the buffer is left as it was.
    pub fn end_shape(&mut self, close: bool) -> SvgResult<()> {
        let Some(points) = self.current_path.take() else {
            return Err(SvgError::EndOutsideShape);
        };
        if points.len() < 2 {
            let count = points.len();
            self.current_path = Some(points);
            return Err(SvgError::TooFewVertices(count));
        }

        let coords = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let d = if close {
            format!("M {coords} Z")
        } else {
            format!("M {coords}")
        };
        let markup = format!(r#"<path d="{}" {}/>"#, d, self.style.to_svg_attrs());
        self.elements.push(Element::RawPath(markup));
        Ok(())
    }

    /// Write the document to `path` as UTF-8, overwriting any existing
    /// file. The filename must end in `.svg` (case-insensitive); missing
    /// parent directories are created.
    pub fn save(&self, path: impl AsRef<Path>) -> SvgResult<()> {
        let path = path.as_ref();
        let has_svg_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !has_svg_ext {
            return Err(ValidationError::Extension(path.to_path_buf()).into());
        }

        let content = self.to_svg();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SvgError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(path, &content).map_err(|source| SvgError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "wrote {} elements ({} bytes) to {}",
            self.elements.len(),
            content.len(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the document: XML declaration, fixed `<svg>` wrapper, and
    /// one line per element in paint order. Pure and deterministic.
    pub fn to_svg(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            out,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        );
        for element in &self.elements {
            out.push_str("    ");
            match element {
                Element::Shape(shape) => out.push_str(&shape.to_svg()),
                Element::RawPath(markup) => out.push_str(markup),
            }
            out.push('\n');
        }
        out.push_str("</svg>");
        out
    }

    /// Serialize the document model to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document model from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
