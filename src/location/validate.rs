use tracing::warn;

use crate::document::Document;

use super::model::{CommentLocation, LocationError};

impl CommentLocation {
    /// Check this location against a document's current content and blocks.
    ///
    /// Absence of a document is a no-op success: content checks are only
    /// meaningful once the target document has been loaded, and a correct
    /// caller validates inside the creation path, right after the load.
    ///
    /// Composite locations evaluate their character-range, paragraph, and
    /// anchor checks in that order and report the first violation.
    pub fn validate(&self, document: Option<&Document>) -> Result<(), LocationError> {
        let Some(document) = document else {
            return Ok(());
        };

        match self {
            CommentLocation::Anchor { anchor_text } => check_anchor(anchor_text, document),
            CommentLocation::Paragraph { paragraph_index } => {
                check_paragraph(*paragraph_index, document)
            }
            CommentLocation::Line { line_number } => check_line(*line_number, document),
            CommentLocation::CharRange {
                start_char,
                end_char,
            } => check_char_range(*start_char, *end_char, document),
            CommentLocation::Block { block_id } => check_block(block_id, document),
            CommentLocation::Composite {
                start_char,
                end_char,
                paragraph_index,
                anchor_text,
            } => {
                check_char_range(*start_char, *end_char, document)?;
                check_paragraph(*paragraph_index, document)?;
                check_anchor(anchor_text, document)
            }
        }
    }
}

/// Both offsets must fall strictly inside the content; an offset equal to
/// the length is already out of bounds.
fn check_char_range(
    start_char: usize,
    end_char: usize,
    document: &Document,
) -> Result<(), LocationError> {
    let length = document.char_count();
    if start_char >= length {
        warn!(start_char, length, "start character exceeds document length");
        return Err(LocationError::StartCharOutOfBounds { start_char, length });
    }
    if end_char >= length {
        warn!(end_char, length, "end character exceeds document length");
        return Err(LocationError::EndCharOutOfBounds { end_char, length });
    }
    Ok(())
}

fn check_paragraph(paragraph_index: usize, document: &Document) -> Result<(), LocationError> {
    let count = document.paragraph_count();
    if paragraph_index >= count {
        warn!(paragraph_index, count, "paragraph index exceeds paragraph count");
        return Err(LocationError::ParagraphOutOfBounds {
            paragraph_index,
            count,
        });
    }
    Ok(())
}

fn check_line(line_number: usize, document: &Document) -> Result<(), LocationError> {
    let count = document.line_count();
    if line_number > count {
        warn!(line_number, count, "line number exceeds line count");
        return Err(LocationError::LineOutOfBounds { line_number, count });
    }
    Ok(())
}

fn check_anchor(anchor_text: &str, document: &Document) -> Result<(), LocationError> {
    let haystack = document.content.to_lowercase();
    if !haystack.contains(&anchor_text.to_lowercase()) {
        warn!(anchor_text, "anchor text not found in document");
        return Err(LocationError::AnchorNotFound {
            anchor_text: anchor_text.to_string(),
        });
    }
    Ok(())
}

fn check_block(block_id: &str, document: &Document) -> Result<(), LocationError> {
    if !document.has_block(block_id) {
        warn!(block_id, "block id not found in document");
        return Err(LocationError::BlockNotFound {
            block_id: block_id.to_string(),
        });
    }
    Ok(())
}
