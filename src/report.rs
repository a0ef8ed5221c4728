//! Human-readable progress lines for a highlighting run.
//!
//! ```text
//! Searching for 'GDPR' using OCR...
//! Found 2 occurrence(s) of 'GDPR'
//!   Highlighted 'GDPR' on page 1
//!   Highlighted 'gdpr' on page 3
//!
//! Added annotation: 'modified by claude'
//!
//! Saved to: out.pdf
//! Total highlights: 2
//! ```
//!
//! Page numbers are 1-based here; everywhere else in the crate they are
//! zero-based.

use std::io::Write;

use crate::config::HighlightConfig;
use crate::error::Result;
use crate::pipeline::{ScanReport, WriteSummary};

/// Writes run progress to any [`Write`] sink (stdout in the binary).
pub struct Reporter<W: Write> {
    out: W,
    term: String,
    note_text: String,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter for a run with `config`.
    pub fn new(out: W, config: &HighlightConfig) -> Self {
        Self {
            out,
            term: config.search_term.clone(),
            note_text: config.note_text.clone(),
        }
    }

    /// Announce the search, before any page is scanned.
    pub fn searching(&mut self) -> Result<()> {
        writeln!(self.out, "Searching for '{}' using OCR...", self.term)?;
        Ok(())
    }

    /// Report the match count, and that nothing will be written when it is zero.
    pub fn scanned(&mut self, scan: &ScanReport) -> Result<()> {
        writeln!(
            self.out,
            "Found {} occurrence(s) of '{}'",
            scan.matches.len(),
            self.term
        )?;
        if scan.is_empty() {
            writeln!(self.out, "No matches found. Exiting.")?;
        }
        Ok(())
    }

    /// Report every placed highlight, the note and the saved file.
    pub fn written(&mut self, scan: &ScanReport, summary: &WriteSummary) -> Result<()> {
        for m in &scan.matches {
            writeln!(self.out, "  Highlighted '{}' on page {}", m.text, m.page_index + 1)?;
        }

        if summary.note_added {
            writeln!(self.out, "\nAdded annotation: '{}'", self.note_text)?;
        }

        writeln!(self.out, "\nSaved to: {}", summary.output.display())?;
        writeln!(self.out, "Total highlights: {}", summary.highlights)?;
        self.out.flush()?;
        Ok(())
    }

    /// Return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
