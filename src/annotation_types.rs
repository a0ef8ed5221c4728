//! Annotation types and enums per ISO 32000-1:2008, Section 12.5.
//!
//! Only the pieces needed to emit highlight and text (note) annotations live here.

use crate::geometry::Rect;

/// Annotation subtype per ISO 32000-1 Table 169.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationSubtype {
    /// Text annotation (sticky note) - Section 12.5.6.4
    Text,
    /// Highlight annotation - Section 12.5.6.10
    Highlight,
}

impl AnnotationSubtype {
    /// Get the PDF name for this annotation subtype.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Highlight => "Highlight",
        }
    }
}

/// Annotation color representation.
///
/// Colors are specified as values in the range 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnnotationColor {
    /// No color (transparent)
    #[default]
    None,
    /// RGB color (3 components)
    Rgb(f32, f32, f32),
}

impl AnnotationColor {
    /// Red, the color highlights get unless configured otherwise.
    pub fn red() -> Self {
        Self::Rgb(1.0, 0.0, 0.0)
    }

    /// Convert to PDF array representation.
    pub fn to_array(&self) -> Option<Vec<f32>> {
        match self {
            Self::None => None,
            Self::Rgb(r, g, b) => Some(vec![*r, *g, *b]),
        }
    }
}

/// Quad points for one highlighted region: 4 corners x 2 coordinates.
///
/// Corner order is top-left, top-right, bottom-left, bottom-right. Viewers
/// draw the highlight from this order, so it is not interchangeable with the
/// counter-clockwise order some writers use.
pub type QuadPoint = [f32; 8];

/// Helper functions for quad points.
pub mod quad_points {
    use super::{QuadPoint, Rect};

    /// Create a quad point from a rectangle.
    pub fn from_rect(rect: &Rect) -> QuadPoint {
        [
            rect.x0, rect.y1, // top-left
            rect.x1, rect.y1, // top-right
            rect.x0, rect.y0, // bottom-left
            rect.x1, rect.y0, // bottom-right
        ]
    }
}
