//! Error types for the toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid input rejected at construction or state-change time.
///
/// No partial mutation precedes any of these: the canvas and the current
/// paint style are left untouched when a call fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid color format: '{0}'")]
    Color(String),
    #[error("invalid fill color: '{0}'")]
    FillColor(String),
    #[error("invalid stroke color: '{0}'")]
    StrokeColor(String),
    #[error("invalid background color: '{0}'")]
    BackgroundColor(String),
    #[error("opacity must be between 0 and 1, got {0}")]
    Opacity(f64),
    #[error("stroke width must be non-negative, got {0}")]
    StrokeWidth(f64),
    #[error("{0} dimensions must be positive")]
    ShapeSize(&'static str),
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    CanvasSize { width: u32, height: u32 },
    #[error("canvas dimensions too large, got {width}x{height} (max {max})")]
    CanvasTooLarge { width: u32, height: u32, max: u32 },
    #[error("filename must have .svg extension: {}", .0.display())]
    Extension(PathBuf),
}

/// Toolkit errors: validation failures, path-protocol sequencing
/// violations, and I/O failures while saving.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot begin shape: previous shape not ended")]
    ShapeInProgress,
    #[error("cannot add vertex: no shape begun")]
    VertexOutsideShape,
    #[error("cannot end shape: no shape begun")]
    EndOutsideShape,
    #[error("shape must have at least 2 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("failed to save SVG to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for toolkit operations.
pub type SvgResult<T> = Result<T, SvgError>;
