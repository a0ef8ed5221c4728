//! Annotation output for highlighted documents.
//!
//! ## Architecture
//!
//! ```text
//! Match[] + original PDF bytes
//!     ↓
//! [HighlightAnnotation] / [TextAnnotation] (annotation dictionaries)
//!     ↓
//! [LopdfAnnotationWriter] (attaches dictionaries to page /Annots)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use ocr_highlight::writer::{AnnotationWriter, LopdfAnnotationWriter};
//!
//! let writer = LopdfAnnotationWriter::from_config(&config);
//! let annotated = writer.write_annotations(&std::fs::read("input.pdf")?, &matches)?;
//! std::fs::write("output.pdf", &annotated.bytes)?;
//! ```

mod annotation_writer;
mod text_annotations;
mod text_markup;

pub use annotation_writer::{AnnotatedDocument, AnnotationWriter, LopdfAnnotationWriter, NotePlacement};
pub use text_annotations::TextAnnotation;
pub use text_markup::HighlightAnnotation;

use crate::annotation_types::AnnotationColor;
use lopdf::Object;

/// Numbers as a PDF array of reals.
pub(crate) fn real_array(values: &[f32]) -> Object {
    Object::Array(values.iter().map(|&v| Object::Real(v)).collect())
}

/// Color as a `/C` array, or `None` for a transparent color.
pub(crate) fn color_array(color: &AnnotationColor) -> Option<Object> {
    color
        .to_array()
        .filter(|components| !components.is_empty())
        .map(|components| real_array(&components))
}
