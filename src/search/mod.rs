//! Term search over OCR tokens.
//!
//! A token matches when its uppercased text contains the uppercased search
//! term. Matching is per token: no whole-word rule, no regex, and no joining
//! of neighbouring tokens.
//!
//! ## Example
//!
//! ```
//! use ocr_highlight::search::TermMatcher;
//!
//! let matcher = TermMatcher::new("GDPR");
//! assert!(matcher.is_match("gdpr"));
//! assert!(matcher.is_match("GDPR-compliant"));
//! assert!(!matcher.is_match("privacy"));
//! ```

mod term_search;

pub use term_search::{Match, TermMatcher};
