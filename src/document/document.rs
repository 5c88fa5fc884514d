use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};
use crate::types::payloads::{DocumentPatch, NewDocument};

/// Titles longer than this are rejected.
pub const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("title cannot be blank")]
    BlankTitle,
    #[error("title must be at most 255 characters, got {0}")]
    TitleTooLong(usize),
    #[error("content cannot be blank")]
    BlankContent,
    #[error("block id cannot be blank")]
    BlankBlockId,
    #[error("duplicate block id '{0}'")]
    DuplicateBlockId(String),
}

/// A named, typed sub-unit of document content, addressable by a stable id
/// independent of character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    pub block_type: String,
    pub content: String,
}

impl Block {
    pub fn new(
        id: impl Into<String>,
        block_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Block {
            id: id.into(),
            block_type: block_type.into(),
            content: content.into(),
        }
    }
}

/// The versioned aggregate holding content, structured blocks, and (by
/// foreign key) its comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub title: String,
    pub content: String,
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Build a new document from a creation payload.
    ///
    /// This is the ONLY way to construct a Document. It enforces all field
    /// invariants and stamps identity, initial version, and timestamps.
    pub fn create(new: NewDocument) -> Result<Self, DocumentError> {
        validate_title(&new.title)?;
        validate_content(&new.content)?;
        validate_blocks(&new.blocks)?;

        let now = Utc::now();
        Ok(Document {
            id: DocumentId::new(),
            version: DocumentVersion::initial(),
            title: new.title,
            content: new.content,
            blocks: new.blocks,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Every provided field is validated before any of them is written, so a
    /// rejected patch leaves the document untouched. The version counter is
    /// advanced by the storage layer's conditional write, not here.
    pub fn apply(&mut self, patch: DocumentPatch) -> Result<(), DocumentError> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(content) = &patch.content {
            validate_content(content)?;
        }
        if let Some(blocks) = &patch.blocks {
            validate_blocks(blocks)?;
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(blocks) = patch.blocks {
            self.blocks = blocks;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Content length in Unicode scalar values, the unit character locations
    /// are measured in.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Paragraphs are separated by one blank line.
    pub fn paragraph_count(&self) -> usize {
        self.content.split("\n\n").count()
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    pub fn has_block(&self, block_id: &str) -> bool {
        self.blocks.iter().any(|block| block.id == block_id)
    }
}

fn validate_title(title: &str) -> Result<(), DocumentError> {
    if title.trim().is_empty() {
        return Err(DocumentError::BlankTitle);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(DocumentError::TitleTooLong(chars));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), DocumentError> {
    if content.trim().is_empty() {
        return Err(DocumentError::BlankContent);
    }
    Ok(())
}

fn validate_blocks(blocks: &[Block]) -> Result<(), DocumentError> {
    let mut seen = BTreeSet::new();
    for block in blocks {
        if block.id.trim().is_empty() {
            return Err(DocumentError::BlankBlockId);
        }
        if !seen.insert(block.id.as_str()) {
            return Err(DocumentError::DuplicateBlockId(block.id.clone()));
        }
    }
    Ok(())
}
