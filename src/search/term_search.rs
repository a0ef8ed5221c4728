//! Case-insensitive substring matching and match records.

use crate::geometry::{CoordinateMapper, Rect};
use crate::ocr::OcrWord;

/// One highlighted occurrence of the search term.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Page number (0-indexed) where the match was found
    pub page_index: usize,
    /// Location on the page in PDF points
    pub rect: Rect,
    /// Full text of the OCR token that matched
    pub text: String,
}

/// Matcher for a single search term.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    needle: String,
}

impl TermMatcher {
    /// Create a matcher for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term.to_uppercase();
        Self { term, needle }
    }

    /// The term as given.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Check whether a token contains the term, ignoring case.
    ///
    /// Empty tokens never match.
    pub fn is_match(&self, token: &str) -> bool {
        !token.is_empty() && token.to_uppercase().contains(&self.needle)
    }

    /// Select matching words and map them into page space, keeping OCR order.
    pub fn search_page(
        &self,
        page_index: usize,
        words: &[OcrWord],
        mapper: &CoordinateMapper,
        page_height: f32,
    ) -> Vec<Match> {
        words
            .iter()
            .filter(|word| self.is_match(&word.text))
            .map(|word| {
                let rect = mapper.to_page_rect(&word.bbox, page_height);
                log::debug!(
                    "Page {}: '{}' at px {:?} -> pt {:?}",
                    page_index,
                    word.text,
                    word.bbox,
                    rect
                );
                Match {
                    page_index,
                    rect,
                    text: word.text.clone(),
                }
            })
            .collect()
    }
}
