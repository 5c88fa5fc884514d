use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::CommentLocation;
use crate::types::identifiers::{CommentId, DocumentId};
use crate::types::payloads::NewComment;

/// Author names longer than this are rejected.
pub const MAX_AUTHOR_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("comment content cannot be blank")]
    BlankContent,
    #[error("author cannot be blank")]
    BlankAuthor,
    #[error("author must be at most 100 characters, got {0}")]
    AuthorTooLong(usize),
}

/// A remark anchored to one location within one document.
///
/// Comments are immutable once created; they disappear only when their
/// document is deleted. The owning document is addressed by id, never held
/// as an in-memory object graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub document_id: DocumentId,
    pub content: String,
    pub author: String,
    pub location: CommentLocation,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment from a creation payload. The location must already
    /// have been validated against the target document.
    pub fn create(document_id: DocumentId, new: NewComment) -> Result<Self, CommentError> {
        if new.content.trim().is_empty() {
            return Err(CommentError::BlankContent);
        }
        if new.author.trim().is_empty() {
            return Err(CommentError::BlankAuthor);
        }
        let author_chars = new.author.chars().count();
        if author_chars > MAX_AUTHOR_CHARS {
            return Err(CommentError::AuthorTooLong(author_chars));
        }

        Ok(Comment {
            id: CommentId::new(),
            document_id,
            content: new.content,
            author: new.author,
            location: new.location,
            created_at: Utc::now(),
        })
    }
}
