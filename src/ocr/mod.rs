//! OCR over rendered page images.
//!
//! The engine itself is external; this module defines the seam the pipeline
//! talks to ([`TextDetector`]) and a backend that drives the `tesseract`
//! executable.
//!
//! Words come back in the order the engine reports them (raster order for
//! Tesseract). Nothing here reorders or merges tokens, so a term that the
//! engine splits across two words is never seen whole.

mod tesseract;
mod tsv;

pub use tesseract::TesseractCli;
pub use tsv::parse_tsv;

use crate::error::Result;
use crate::geometry::PixelBox;
use crate::rendering::PageImage;

/// A token detected by the OCR engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrWord {
    /// Recognized text (may be empty for layout rows)
    pub text: String,
    /// Bounding box in image pixels
    pub bbox: PixelBox,
    /// Engine confidence, 0-100 (negative when not reported)
    pub confidence: f32,
}

impl OcrWord {
    /// Create a word with unknown confidence.
    pub fn new(text: impl Into<String>, bbox: PixelBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence: -1.0,
        }
    }
}

/// Text detection over page bitmaps.
pub trait TextDetector {
    /// Detect words on a rendered page.
    fn detect_words(&self, page: &PageImage) -> Result<Vec<OcrWord>>;
}
