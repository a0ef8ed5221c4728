//! Page rasterization for OCR.
//!
//! Vector-drawn text has no extractable text layer, so every page is
//! rendered to a bitmap and handed to the OCR engine.
//!
//! ## Example
//!
//! ```ignore
//! use ocr_highlight::rendering::{bind_pdfium, PageRasterizer, PdfiumRasterizer, RenderOptions};
//!
//! let pdfium = bind_pdfium()?;
//! let rasterizer = PdfiumRasterizer::open(&pdfium, "input.pdf", RenderOptions::with_zoom(3.0))?;
//! let page = rasterizer.render_page(0)?;
//! println!("{}x{} px for a {}pt tall page", page.image.width(), page.image.height(), page.page_height);
//! ```

mod page_renderer;

pub use page_renderer::{bind_pdfium, PdfiumRasterizer};

use crate::error::Result;
use image::RgbaImage;

/// Options for page rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Linear magnification (default: 3.0)
    pub zoom: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            zoom: crate::config::DEFAULT_ZOOM,
        }
    }
}

impl RenderOptions {
    /// Create options with a custom zoom.
    pub fn with_zoom(zoom: f32) -> Self {
        Self { zoom }
    }
}

/// One rendered page together with the page geometry needed to map boxes back.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Rendered bitmap
    pub image: RgbaImage,
    /// Native page width in points
    pub page_width: f32,
    /// Native page height in points
    pub page_height: f32,
    /// Zoom the bitmap was rendered at
    pub zoom: f32,
}

/// Source of page bitmaps.
pub trait PageRasterizer {
    /// Number of pages in the open document.
    fn page_count(&self) -> usize;

    /// Render one zero-based page.
    fn render_page(&self, page: usize) -> Result<PageImage>;
}
