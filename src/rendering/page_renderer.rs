//! PDFium-backed page renderer.

use std::path::Path;

use image::RgbaImage;
use pdfium_render::prelude::*;

use super::{PageImage, PageRasterizer, RenderOptions};
use crate::error::{Error, Result};

/// Bind the PDFium library, trying the system library first and then one
/// in the current directory.
pub fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_system_library()
        .or_else(|_| Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./")))
        .map_err(|e| Error::Render(format!("Failed to bind PDFium library: {:?}", e)))?;

    Ok(Pdfium::new(bindings))
}

/// Page rasterizer over a document opened with PDFium.
pub struct PdfiumRasterizer<'a> {
    document: PdfDocument<'a>,
    options: RenderOptions,
}

impl<'a> PdfiumRasterizer<'a> {
    /// Open a PDF file for rendering.
    pub fn open(pdfium: &'a Pdfium, path: impl AsRef<Path>, options: RenderOptions) -> Result<Self> {
        let path = path.as_ref();
        let document = pdfium.load_pdf_from_file(path, None).map_err(|e| {
            Error::InvalidPdf(format!("Failed to open {}: {:?}", path.display(), e))
        })?;

        log::debug!("Opened {} ({} pages)", path.display(), document.pages().len());

        Ok(Self { document, options })
    }
}

impl PageRasterizer for PdfiumRasterizer<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, page: usize) -> Result<PageImage> {
        let page_count = self.page_count();
        if page >= page_count {
            return Err(Error::PageOutOfRange { page, page_count });
        }

        let pdf_page = self.document.pages().get(page as PdfPageIndex)?;
        let page_width = pdf_page.width().value;
        let page_height = pdf_page.height().value;

        let config = PdfRenderConfig::new()
            .scale_page_by_factor(self.options.zoom)
            .render_annotations(true);

        let bitmap = pdf_page.render_with_config(&config)?;
        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;

        let image = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes()).ok_or_else(|| {
            Error::Image(format!("Bitmap buffer does not match {}x{} RGBA", width, height))
        })?;

        log::debug!(
            "Rendered page {} at {}x: {}x{} px ({}x{} pt)",
            page,
            self.options.zoom,
            width,
            height,
            page_width,
            page_height
        );

        Ok(PageImage {
            image,
            page_width,
            page_height,
            zoom: self.options.zoom,
        })
    }
}
