//! Inkplot Core Library
//!
//! An immediate-mode SVG document builder. A [`Canvas`] accumulates styled
//! shapes and paths in paint order, then serializes everything into a single
//! `.svg` file.

pub mod canvas;
pub mod error;
pub mod shapes;
pub mod style;

pub use canvas::{Canvas, Element, MAX_DIMENSION};
pub use error::{SvgError, SvgResult, ValidationError};
pub use shapes::{Ellipse, Rectangle, Shape};
pub use style::{Color, Style};
