//! Attaching highlight and note annotations to an existing document.

use lopdf::{Document, Object, ObjectId};

use super::{HighlightAnnotation, TextAnnotation};
use crate::annotation_types::AnnotationColor;
use crate::config::HighlightConfig;
use crate::error::{Error, Result};
use crate::search::Match;

/// Guard against `/Parent` cycles when looking up inherited page attributes.
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Where and what the first-page note is.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePlacement {
    /// Note contents
    pub text: String,
    /// Left edge in points
    pub x: f32,
    /// Icon width and height in points
    pub size: f32,
    /// Distance from the page top to the note's bottom edge
    pub top_offset: f32,
}

/// Result of annotating a document.
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    /// Serialized PDF
    pub bytes: Vec<u8>,
    /// Number of highlight annotations added
    pub highlights: usize,
    /// Whether the note was added (false for a document without pages)
    pub note_added: bool,
}

/// Produces an annotated copy of a PDF.
pub trait AnnotationWriter {
    /// Add one highlight per match plus the first-page note, returning the new document.
    fn write_annotations(&self, input: &[u8], matches: &[Match]) -> Result<AnnotatedDocument>;
}

/// [`AnnotationWriter`] built on `lopdf`'s object model.
#[derive(Debug, Clone)]
pub struct LopdfAnnotationWriter {
    highlight_color: AnnotationColor,
    note: NotePlacement,
}

impl LopdfAnnotationWriter {
    /// Create a writer with an explicit color and note.
    pub fn new(highlight_color: AnnotationColor, note: NotePlacement) -> Self {
        Self {
            highlight_color,
            note,
        }
    }

    /// Create a writer from a run configuration.
    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(
            config.highlight_color.clone(),
            NotePlacement {
                text: config.note_text.clone(),
                x: config.note_x,
                size: config.note_size,
                top_offset: config.note_top_offset,
            },
        )
    }
}

impl AnnotationWriter for LopdfAnnotationWriter {
    fn write_annotations(&self, input: &[u8], matches: &[Match]) -> Result<AnnotatedDocument> {
        let mut doc = Document::load_mem(input).map_err(|e| Error::InvalidPdf(e.to_string()))?;
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

        for m in matches {
            let page_id = *pages.get(m.page_index).ok_or(Error::PageOutOfRange {
                page: m.page_index,
                page_count: pages.len(),
            })?;

            let highlight = HighlightAnnotation::from_rect(m.rect)
                .with_annotation_color(self.highlight_color.clone())
                .build();
            let annot_id = doc.add_object(Object::Dictionary(highlight));
            attach_annotation(&mut doc, page_id, annot_id)?;

            log::debug!("Attached highlight {:?} to page {}", m.rect.to_array(), m.page_index);
        }

        let note_added = match pages.first() {
            Some(&first_page) => {
                let page_height = page_height(&doc, first_page)?;
                let note = TextAnnotation::near_top(
                    self.note.x,
                    self.note.size,
                    self.note.top_offset,
                    page_height,
                    self.note.text.clone(),
                );
                let annot_id = doc.add_object(Object::Dictionary(note.build()));
                attach_annotation(&mut doc, first_page, annot_id)?;
                true
            },
            None => {
                log::warn!("Document has no pages, skipping note annotation");
                false
            },
        };

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;

        Ok(AnnotatedDocument {
            bytes,
            highlights: matches.len(),
            note_added,
        })
    }
}

/// Append an annotation reference to a page's `/Annots`, creating the array if needed.
fn attach_annotation(doc: &mut Document, page_id: ObjectId, annot_id: ObjectId) -> Result<()> {
    let existing = doc.get_dictionary(page_id)?.get(b"Annots").ok().cloned();

    match existing {
        Some(Object::Reference(array_id)) => {
            doc.get_object_mut(array_id)?
                .as_array_mut()?
                .push(Object::Reference(annot_id));
        },
        Some(Object::Array(mut annots)) => {
            annots.push(Object::Reference(annot_id));
            doc.get_dictionary_mut(page_id)?.set("Annots", Object::Array(annots));
        },
        _ => {
            doc.get_dictionary_mut(page_id)?
                .set("Annots", Object::Array(vec![Object::Reference(annot_id)]));
        },
    }

    Ok(())
}

/// Height of a page's `/MediaBox`, following `/Parent` for inherited boxes.
fn page_height(doc: &Document, page_id: ObjectId) -> Result<f32> {
    let mut current = Some(page_id);

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        let Some(node_id) = current else { break };
        let node = doc.get_dictionary(node_id)?;

        if let Ok(media_box) = node.get(b"MediaBox") {
            let values = resolve(doc, media_box)?
                .as_array()?
                .iter()
                .map(|v| number(resolve(doc, v)?))
                .collect::<Result<Vec<f32>>>()?;

            if values.len() == 4 {
                return Ok(values[3] - values[1]);
            }
            return Err(Error::InvalidPdf(format!(
                "MediaBox has {} entries, expected 4",
                values.len()
            )));
        }

        current = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    Err(Error::InvalidPdf("first page has no MediaBox".to_string()))
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

fn number(obj: &Object) -> Result<f32> {
    match obj {
        Object::Integer(v) => Ok(*v as f32),
        Object::Real(v) => Ok(*v),
        other => Err(Error::InvalidPdf(format!("expected a number, found {:?}", other))),
    }
}
