//! Configuration for a highlighting run.

use crate::annotation_types::AnnotationColor;
use crate::error::{Error, Result};

/// Term searched for when nothing else is configured.
pub const DEFAULT_SEARCH_TERM: &str = "GDPR";

/// Linear magnification used to rasterize pages before OCR.
pub const DEFAULT_ZOOM: f32 = 3.0;

/// Message carried by the note placed on the first page.
pub const DEFAULT_NOTE_TEXT: &str = "modified by claude";

/// Highlighting run configuration.
///
/// The zoom factor is shared by the rasterizer and the coordinate mapper;
/// both must see the same value or every highlight lands in the wrong place.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Term matched case-insensitively against each OCR token.
    pub search_term: String,

    /// Rasterization magnification (pixels per point).
    pub zoom: f32,

    /// Contents of the note annotation on the first page.
    pub note_text: String,

    /// Left edge of the note, in points.
    pub note_x: f32,

    /// Width and height of the note icon, in points.
    pub note_size: f32,

    /// Distance from the top of the page to the bottom edge of the note.
    pub note_top_offset: f32,

    /// Highlight color.
    pub highlight_color: AnnotationColor,

    /// Tesseract language pack.
    pub ocr_language: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            zoom: DEFAULT_ZOOM,
            note_text: DEFAULT_NOTE_TEXT.to_string(),
            note_x: 500.0,
            note_size: 20.0,
            note_top_offset: 40.0,
            highlight_color: AnnotationColor::red(),
            ocr_language: "eng".to_string(),
        }
    }

    /// Set the search term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the rasterization zoom.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the note contents.
    pub fn with_note_text(mut self, text: impl Into<String>) -> Self {
        self.note_text = text.into();
        self
    }

    /// Set the highlight color (RGB).
    pub fn with_highlight_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.highlight_color = AnnotationColor::Rgb(r, g, b);
        self
    }

    /// Set the OCR language.
    pub fn with_ocr_language(mut self, lang: impl Into<String>) -> Self {
        self.ocr_language = lang.into();
        self
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.search_term.trim().is_empty() {
            return Err(Error::InvalidConfig("search term is empty".to_string()));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "zoom must be a positive number, got {}",
                self.zoom
            )));
        }
        if self.ocr_language.is_empty() {
            return Err(Error::InvalidConfig("OCR language is empty".to_string()));
        }
        Ok(())
    }
}
