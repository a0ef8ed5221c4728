//! Text annotations (sticky notes) for PDF output.
//!
//! Per ISO 32000-1 Section 12.5.6.4, a text annotation displays an icon that,
//! when opened, shows a pop-up window containing its contents. The dictionary
//! carries only `/Rect`, `/Contents` and `/Open false`; icon, color and flags
//! are left to the viewer's defaults.

use lopdf::{Dictionary, Object, StringFormat};

use super::real_array;
use crate::annotation_types::AnnotationSubtype;
use crate::geometry::Rect;

/// A closed text annotation (sticky note).
#[derive(Debug, Clone)]
pub struct TextAnnotation {
    /// Bounding rectangle for the icon
    pub rect: Rect,
    /// Text contents of the note
    pub contents: String,
}

impl TextAnnotation {
    /// Create a new text annotation (sticky note).
    pub fn new(rect: Rect, contents: impl Into<String>) -> Self {
        Self {
            rect,
            contents: contents.into(),
        }
    }

    /// Place a `size` x `size` note whose bottom edge sits `top_offset` below
    /// the top of a page `page_height` points tall.
    pub fn near_top(
        x: f32,
        size: f32,
        top_offset: f32,
        page_height: f32,
        contents: impl Into<String>,
    ) -> Self {
        let y0 = page_height - top_offset;
        Self::new(Rect::from_points(x, y0, x + size, y0 + size), contents)
    }

    /// Build the annotation dictionary.
    pub fn build(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::Name(b"Annot".to_vec()));
        dict.set(
            "Subtype",
            Object::Name(AnnotationSubtype::Text.pdf_name().as_bytes().to_vec()),
        );
        dict.set("Rect", real_array(&self.rect.to_array()));
        dict.set(
            "Contents",
            Object::String(self.contents.as_bytes().to_vec(), StringFormat::Literal),
        );
        dict.set("Open", Object::Boolean(false));

        dict
    }
}
