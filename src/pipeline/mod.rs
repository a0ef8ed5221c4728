//! The highlighting pipeline.
//!
//! ```text
//! PDF file
//!     ↓
//! [PageRasterizer] (page → bitmap at a fixed zoom)
//!     ↓
//! [TextDetector] (bitmap → OcrWord[] in pixels)
//!     ↓
//! [TermMatcher] + [CoordinateMapper] (matching words → Match[] in points)
//!     ↓
//! [AnnotationWriter] (original PDF + Match[] → annotated PDF)
//!     ↓
//! Output file
//! ```
//!
//! Pages are processed one at a time, in order, and every external call is
//! made exactly once. The output file is written in a single write at the end,
//! and only when at least one match was found.
//!
//! [TermMatcher]: crate::search::TermMatcher
//! [CoordinateMapper]: crate::geometry::CoordinateMapper

use std::path::{Path, PathBuf};

use crate::config::HighlightConfig;
use crate::error::{Error, Result};
use crate::geometry::CoordinateMapper;
use crate::ocr::TextDetector;
use crate::rendering::PageRasterizer;
use crate::search::{Match, TermMatcher};
use crate::writer::AnnotationWriter;

/// Matches found by one scan over every page.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Matches in page order, then OCR order within a page
    pub matches: Vec<Match>,
    /// Number of pages rasterized and OCR'd
    pub pages_scanned: usize,
}

impl ScanReport {
    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// What the write step produced.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of highlight annotations written
    pub highlights: usize,
    /// Whether the first-page note was added
    pub note_added: bool,
    /// Where the document was written
    pub output: PathBuf,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The scan results
    pub scan: ScanReport,
    /// `None` when there were no matches and nothing was written
    pub written: Option<WriteSummary>,
}

/// Rasterize → OCR → map → annotate, over pluggable backends.
pub struct HighlightPipeline<R, D, W> {
    config: HighlightConfig,
    rasterizer: R,
    detector: D,
    writer: W,
}

impl<R, D, W> HighlightPipeline<R, D, W>
where
    R: PageRasterizer,
    D: TextDetector,
    W: AnnotationWriter,
{
    /// Create a pipeline, rejecting an unusable configuration.
    pub fn new(config: HighlightConfig, rasterizer: R, detector: D, writer: W) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rasterizer,
            detector,
            writer,
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Rasterize and OCR every page, collecting matches.
    pub fn scan(&self) -> Result<ScanReport> {
        let matcher = TermMatcher::new(self.config.search_term.as_str());
        let mapper = CoordinateMapper::new(self.config.zoom);
        let page_count = self.rasterizer.page_count();

        let mut report = ScanReport::default();

        for page_index in 0..page_count {
            let page = self.rasterizer.render_page(page_index)?;
            if page.zoom != mapper.zoom() {
                return Err(Error::InvalidConfig(format!(
                    "page {} rendered at zoom {} but boxes are mapped with zoom {}",
                    page_index,
                    page.zoom,
                    mapper.zoom()
                )));
            }

            let words = self.detector.detect_words(&page)?;
            let found = matcher.search_page(page_index, &words, &mapper, page.page_height);

            for m in &found {
                if !m.rect.is_within_page(page.page_width, page.page_height) {
                    log::warn!(
                        "Match '{}' on page {} extends past the page: {:?}",
                        m.text,
                        page_index,
                        m.rect.to_array()
                    );
                }
            }

            log::debug!(
                "Page {}: {} words, {} matches",
                page_index,
                words.len(),
                found.len()
            );

            report.matches.extend(found);
            report.pages_scanned += 1;
        }

        log::info!(
            "Scanned {} pages, {} matches for '{}'",
            report.pages_scanned,
            report.matches.len(),
            matcher.term()
        );

        Ok(report)
    }

    /// Annotate `input` with the scan's matches and write the result to `output`.
    pub fn write(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        scan: &ScanReport,
    ) -> Result<WriteSummary> {
        let original = std::fs::read(input.as_ref())?;
        let annotated = self.writer.write_annotations(&original, &scan.matches)?;

        let output = output.as_ref();
        std::fs::write(output, &annotated.bytes)?;

        log::info!("Wrote {} bytes to {}", annotated.bytes.len(), output.display());

        Ok(WriteSummary {
            highlights: annotated.highlights,
            note_added: annotated.note_added,
            output: output.to_path_buf(),
        })
    }

    /// Scan, then write only if something matched.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunOutcome> {
        let scan = self.scan()?;
        if scan.is_empty() {
            return Ok(RunOutcome {
                scan,
                written: None,
            });
        }

        let written = self.write(input, output, &scan)?;
        Ok(RunOutcome {
            scan,
            written: Some(written),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelBox;
    use crate::ocr::OcrWord;
    use crate::rendering::PageImage;
    use crate::writer::AnnotatedDocument;
    use image::RgbaImage;
    use std::cell::RefCell;

    struct FakeRasterizer {
        pages: usize,
        zoom: f32,
        rendered: RefCell<Vec<usize>>,
    }

    impl PageRasterizer for FakeRasterizer {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn render_page(&self, page: usize) -> Result<PageImage> {
            self.rendered.borrow_mut().push(page);
            Ok(PageImage {
                image: RgbaImage::new(2, 2),
                page_width: 612.0,
                page_height: 792.0,
                zoom: self.zoom,
            })
        }
    }

    struct FakeDetector {
        words: Vec<OcrWord>,
    }

    impl TextDetector for FakeDetector {
        fn detect_words(&self, _page: &PageImage) -> Result<Vec<OcrWord>> {
            Ok(self.words.clone())
        }
    }

    struct FailingDetector;

    impl TextDetector for FailingDetector {
        fn detect_words(&self, _page: &PageImage) -> Result<Vec<OcrWord>> {
            Err(Error::Ocr("engine crashed".to_string()))
        }
    }

    struct NoWrite;

    impl AnnotationWriter for NoWrite {
        fn write_annotations(&self, _input: &[u8], _matches: &[Match]) -> Result<AnnotatedDocument> {
            panic!("writer must not be called");
        }
    }

    fn rasterizer(pages: usize) -> FakeRasterizer {
        FakeRasterizer {
            pages,
            zoom: 3.0,
            rendered: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_scan_visits_pages_in_order() {
        let words = vec![
            OcrWord::new("GDPR", PixelBox::new(300.0, 0.0, 60.0, 30.0)),
            OcrWord::new("privacy", PixelBox::new(400.0, 0.0, 60.0, 30.0)),
        ];
        let pipeline = HighlightPipeline::new(
            HighlightConfig::default(),
            rasterizer(3),
            FakeDetector { words },
            NoWrite,
        )
        .unwrap();

        let report = pipeline.scan().unwrap();
        assert_eq!(report.pages_scanned, 3);
        assert_eq!(*pipeline.rasterizer.rendered.borrow(), vec![0, 1, 2]);

        let pages: Vec<usize> = report.matches.iter().map(|m| m.page_index).collect();
        assert_eq!(pages, vec![0, 1, 2]);
        assert_eq!(report.matches[0].rect.y1, 792.0);
    }

    #[test]
    fn test_run_without_matches_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        let pipeline = HighlightPipeline::new(
            HighlightConfig::default(),
            rasterizer(1),
            FakeDetector {
                words: vec![OcrWord::new("privacy", PixelBox::new(0.0, 0.0, 1.0, 1.0))],
            },
            NoWrite,
        )
        .unwrap();

        let outcome = pipeline.run(dir.path().join("missing.pdf"), &output).unwrap();
        assert!(outcome.scan.is_empty());
        assert!(outcome.written.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_ocr_failure_aborts_scan() {
        let pipeline =
            HighlightPipeline::new(HighlightConfig::default(), rasterizer(2), FailingDetector, NoWrite)
                .unwrap();
        assert!(matches!(pipeline.scan(), Err(Error::Ocr(_))));
    }

    #[test]
    fn test_zoom_mismatch_is_rejected() {
        let mut raster = rasterizer(1);
        raster.zoom = 2.0;
        let pipeline = HighlightPipeline::new(
            HighlightConfig::default(),
            raster,
            FakeDetector { words: vec![] },
            NoWrite,
        )
        .unwrap();
        assert!(matches!(pipeline.scan(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let result = HighlightPipeline::new(
            HighlightConfig::default().with_search_term(""),
            rasterizer(1),
            FakeDetector { words: vec![] },
            NoWrite,
        );
        assert!(result.is_err());
    }
}
