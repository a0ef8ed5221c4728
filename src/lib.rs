// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]
#![cfg_attr(test, allow(unused_variables))]

//! # OCR Highlight
//!
//! Highlight a search term in PDFs whose text is drawn as vector outlines,
//! where the text layer cannot be searched.
//!
//! Each page is rendered to a bitmap, the bitmap is OCR'd, and every word that
//! contains the term (case-insensitively) becomes a highlight annotation placed
//! over the word in the original document. A sticky note is added to the first
//! page to mark the file as modified.
//!
//! ## Architecture
//!
//! - [`rendering`]: page rasterization through PDFium
//! - [`ocr`]: word boxes from the Tesseract CLI (TSV output)
//! - [`search`]: term matching over OCR words
//! - [`geometry`]: pixel space to PDF user space mapping
//! - [`writer`]: highlight and note annotations written with lopdf
//! - [`pipeline`]: the end-to-end run over pluggable backends
//! - [`report`]: the progress lines printed by `highlight_pdf`
//!
//! Rendering, OCR and writing sit behind the [`PageRasterizer`],
//! [`TextDetector`] and [`AnnotationWriter`] traits, so the pipeline can be
//! driven by fakes in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ocr_highlight::rendering::{bind_pdfium, PdfiumRasterizer, RenderOptions};
//! use ocr_highlight::{HighlightConfig, HighlightPipeline, LopdfAnnotationWriter, TesseractCli};
//!
//! # fn main() -> ocr_highlight::Result<()> {
//! let config = HighlightConfig::default();
//! let pdfium = bind_pdfium()?;
//! let rasterizer =
//!     PdfiumRasterizer::open(&pdfium, "input.pdf", RenderOptions::with_zoom(config.zoom))?;
//! let detector = TesseractCli::new(config.ocr_language.clone());
//! let writer = LopdfAnnotationWriter::from_config(&config);
//!
//! let pipeline = HighlightPipeline::new(config, rasterizer, detector, writer)?;
//! let outcome = pipeline.run("input.pdf", "output.pdf")?;
//! println!("{} matches", outcome.scan.matches.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Coordinates and rectangles
pub mod geometry;

/// Annotation subtypes, colors and quad points
pub mod annotation_types;

// Page rasterization
pub mod rendering;

// Word detection
pub mod ocr;

// Term matching
pub mod search;

// Annotation output
pub mod writer;

// End-to-end run
pub mod pipeline;

// Progress output
pub mod report;

// Re-exports
pub use annotation_types::{AnnotationColor, AnnotationSubtype, QuadPoint};
pub use config::HighlightConfig;
pub use error::{Error, Result};
pub use geometry::{CoordinateMapper, PixelBox, Rect};
pub use ocr::{OcrWord, TesseractCli, TextDetector};
pub use pipeline::{HighlightPipeline, RunOutcome, ScanReport, WriteSummary};
pub use rendering::{PageImage, PageRasterizer, RenderOptions};
pub use report::Reporter;
pub use search::{Match, TermMatcher};
pub use writer::{AnnotatedDocument, AnnotationWriter, LopdfAnnotationWriter};
