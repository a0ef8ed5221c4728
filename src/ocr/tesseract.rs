//! Tesseract backend driven through the `tesseract` command line tool.

use std::path::PathBuf;
use std::process::Command;

use super::{parse_tsv, OcrWord, TextDetector};
use crate::error::{Error, Result};
use crate::rendering::PageImage;

/// Runs the `tesseract` executable once per page and reads its TSV output.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    program: PathBuf,
    language: String,
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("eng")
    }
}

impl TesseractCli {
    /// Create a backend using `tesseract` from `PATH`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("tesseract"),
            language: language.into(),
        }
    }

    /// Use a specific `tesseract` binary.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Language pack passed with `-l`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check whether the executable can be started.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }
}

impl TextDetector for TesseractCli {
    fn detect_words(&self, page: &PageImage) -> Result<Vec<OcrWord>> {
        let input = tempfile::Builder::new()
            .prefix("ocr_page_")
            .suffix(".png")
            .tempfile()?;

        page.image
            .save_with_format(input.path(), image::ImageFormat::Png)?;

        let output = Command::new(&self.program)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("tsv")
            .output()
            .map_err(|e| {
                Error::Ocr(format!("Failed to run {}: {}", self.program.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let words = parse_tsv(&stdout)?;

        log::debug!(
            "Tesseract returned {} rows for a {}x{} image",
            words.len(),
            page.image.width(),
            page.image.height()
        );

        Ok(words)
    }
}
