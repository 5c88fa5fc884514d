use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a location was rejected, either at construction or against a
/// document. Messages name the offending bound and the document-side count
/// so the boundary can surface them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("start character {start_char} must be less than or equal to end character {end_char}")]
    InvertedCharRange { start_char: usize, end_char: usize },
    #[error("line number must be positive")]
    LineNumberZero,
    #[error("anchor text cannot be blank")]
    BlankAnchorText,
    #[error("block id cannot be blank")]
    BlankBlockId,
    #[error("start character {start_char} exceeds document length {length}")]
    StartCharOutOfBounds { start_char: usize, length: usize },
    #[error("end character {end_char} exceeds document length {length}")]
    EndCharOutOfBounds { end_char: usize, length: usize },
    #[error("paragraph index {paragraph_index} exceeds document paragraph count ({count})")]
    ParagraphOutOfBounds { paragraph_index: usize, count: usize },
    #[error("line number {line_number} exceeds document line count ({count})")]
    LineOutOfBounds { line_number: usize, count: usize },
    #[error("anchor text '{anchor_text}' not found in document")]
    AnchorNotFound { anchor_text: String },
    #[error("block id '{block_id}' not found in document")]
    BlockNotFound { block_id: String },
}

/// Where in a document a comment points.
///
/// A closed set of addressing schemes, serialized with a `type`
/// discriminator (`anchor | paragraph | line | charRange | block |
/// composite`). The per-variant constructors are the canonical way to build
/// one: they enforce the structural invariants that hold regardless of any
/// document, and deserialization funnels through the same checks, so a
/// malformed payload fails before any I/O. Checks that need the document's
/// current content live in [`CommentLocation::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", try_from = "raw::RawLocation")]
pub enum CommentLocation {
    /// Case-insensitive substring of the document content.
    #[serde(rename_all = "camelCase")]
    Anchor { anchor_text: String },
    /// Zero-based index into the blank-line-separated paragraphs.
    #[serde(rename_all = "camelCase")]
    Paragraph { paragraph_index: usize },
    /// One-based line number.
    #[serde(rename_all = "camelCase")]
    Line { line_number: usize },
    /// Inclusive range of zero-based character offsets.
    #[serde(rename_all = "camelCase")]
    CharRange { start_char: usize, end_char: usize },
    /// Stable id of one of the document's content blocks.
    #[serde(rename_all = "camelCase")]
    Block { block_id: String },
    /// Character range, paragraph, and anchor at once; all three must hold.
    #[serde(rename_all = "camelCase")]
    Composite {
        start_char: usize,
        end_char: usize,
        paragraph_index: usize,
        anchor_text: String,
    },
}

impl CommentLocation {
    pub fn anchor(anchor_text: impl Into<String>) -> Result<Self, LocationError> {
        let anchor_text = anchor_text.into();
        if anchor_text.trim().is_empty() {
            return Err(LocationError::BlankAnchorText);
        }
        Ok(CommentLocation::Anchor { anchor_text })
    }

    /// Paragraph indices carry no structural invariant beyond being
    /// non-negative, which the type already guarantees.
    pub fn paragraph(paragraph_index: usize) -> Self {
        CommentLocation::Paragraph { paragraph_index }
    }

    pub fn line(line_number: usize) -> Result<Self, LocationError> {
        if line_number == 0 {
            return Err(LocationError::LineNumberZero);
        }
        Ok(CommentLocation::Line { line_number })
    }

    pub fn char_range(start_char: usize, end_char: usize) -> Result<Self, LocationError> {
        if start_char > end_char {
            return Err(LocationError::InvertedCharRange {
                start_char,
                end_char,
            });
        }
        Ok(CommentLocation::CharRange {
            start_char,
            end_char,
        })
    }

    pub fn block(block_id: impl Into<String>) -> Result<Self, LocationError> {
        let block_id = block_id.into();
        if block_id.trim().is_empty() {
            return Err(LocationError::BlankBlockId);
        }
        Ok(CommentLocation::Block { block_id })
    }

    pub fn composite(
        start_char: usize,
        end_char: usize,
        paragraph_index: usize,
        anchor_text: impl Into<String>,
    ) -> Result<Self, LocationError> {
        if start_char > end_char {
            return Err(LocationError::InvertedCharRange {
                start_char,
                end_char,
            });
        }
        let anchor_text = anchor_text.into();
        if anchor_text.trim().is_empty() {
            return Err(LocationError::BlankAnchorText);
        }
        Ok(CommentLocation::Composite {
            start_char,
            end_char,
            paragraph_index,
            anchor_text,
        })
    }

    /// The paragraph this location addresses, when it addresses one.
    pub fn paragraph_index(&self) -> Option<usize> {
        match self {
            CommentLocation::Paragraph { paragraph_index }
            | CommentLocation::Composite {
                paragraph_index, ..
            } => Some(*paragraph_index),
            _ => None,
        }
    }
}

mod raw {
    use serde::Deserialize;

    /// Unchecked mirror of [`super::CommentLocation`]: deserialization lands
    /// here first, then passes through the validating constructors.
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type", rename_all = "camelCase")]
    pub enum RawLocation {
        #[serde(rename_all = "camelCase")]
        Anchor { anchor_text: String },
        #[serde(rename_all = "camelCase")]
        Paragraph { paragraph_index: usize },
        #[serde(rename_all = "camelCase")]
        Line { line_number: usize },
        #[serde(rename_all = "camelCase")]
        CharRange { start_char: usize, end_char: usize },
        #[serde(rename_all = "camelCase")]
        Block { block_id: String },
        #[serde(rename_all = "camelCase")]
        Composite {
            start_char: usize,
            end_char: usize,
            paragraph_index: usize,
            anchor_text: String,
        },
    }
}

impl TryFrom<raw::RawLocation> for CommentLocation {
    type Error = LocationError;

    fn try_from(raw: raw::RawLocation) -> Result<Self, Self::Error> {
        match raw {
            raw::RawLocation::Anchor { anchor_text } => CommentLocation::anchor(anchor_text),
            raw::RawLocation::Paragraph { paragraph_index } => {
                Ok(CommentLocation::paragraph(paragraph_index))
            }
            raw::RawLocation::Line { line_number } => CommentLocation::line(line_number),
            raw::RawLocation::CharRange {
                start_char,
                end_char,
            } => CommentLocation::char_range(start_char, end_char),
            raw::RawLocation::Block { block_id } => CommentLocation::block(block_id),
            raw::RawLocation::Composite {
                start_char,
                end_char,
                paragraph_index,
                anchor_text,
            } => CommentLocation::composite(start_char, end_char, paragraph_index, anchor_text),
        }
    }
}
