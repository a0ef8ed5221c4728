//! Highlight annotations for PDF output.
//!
//! Per ISO 32000-1 Section 12.5.6.10, a highlight is a text markup annotation
//! whose `/QuadPoints` describe the marked region and whose `/Rect` bounds it.
//!
//! # Example
//!
//! ```
//! use ocr_highlight::geometry::Rect;
//! use ocr_highlight::writer::HighlightAnnotation;
//!
//! let highlight = HighlightAnnotation::from_rect(Rect::from_points(72.0, 700.0, 120.0, 712.0));
//! let dict = highlight.build();
//! assert!(dict.has(b"QuadPoints"));
//! ```

use lopdf::{Dictionary, Object};

use super::{color_array, real_array};
use crate::annotation_types::{quad_points, AnnotationColor, AnnotationSubtype, QuadPoint};
use crate::geometry::Rect;

/// A highlight annotation over one rectangular region.
#[derive(Debug, Clone)]
pub struct HighlightAnnotation {
    /// Displayed rectangle
    pub rect: Rect,
    /// QuadPoints defining the highlighted area, in top-left, top-right,
    /// bottom-left, bottom-right order
    pub quad_points: QuadPoint,
    /// Annotation color
    pub color: AnnotationColor,
}

impl HighlightAnnotation {
    /// Create a red highlight covering exactly `rect`.
    ///
    /// The rectangle is used as-is for `/Rect`; no normalisation or clamping.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            quad_points: quad_points::from_rect(&rect),
            color: AnnotationColor::red(),
        }
    }

    /// Set the color.
    pub fn with_annotation_color(mut self, color: AnnotationColor) -> Self {
        self.color = color;
        self
    }

    /// Build the annotation dictionary.
    ///
    /// No `/F` entry is written, so the highlight is shown on screen but not
    /// printed.
    pub fn build(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::Name(b"Annot".to_vec()));
        dict.set(
            "Subtype",
            Object::Name(AnnotationSubtype::Highlight.pdf_name().as_bytes().to_vec()),
        );
        dict.set("Rect", real_array(&self.rect.to_array()));
        dict.set("QuadPoints", real_array(&self.quad_points));

        if let Some(color) = color_array(&self.color) {
            dict.set("C", color);
        }

        dict
    }
}
