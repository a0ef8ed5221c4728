//! Error types for the highlighting pipeline.
//!
//! This module defines all error types that can occur while rasterizing,
//! running OCR, and writing annotated PDFs.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a highlighting run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be read as a PDF document
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// Page index outside the document
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested zero-based page index
        page: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Page rasterization failed
    #[error("Render error: {0}")]
    Render(String),

    /// OCR engine failed or produced unreadable output
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Image encoding or buffer error
    #[error("Image error: {0}")]
    Image(String),

    /// PDF object model error while editing the output document
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<pdfium_render::prelude::PdfiumError> for Error {
    fn from(err: pdfium_render::prelude::PdfiumError) -> Self {
        Error::Render(format!("{:?}", err))
    }
}
