use tracing::{debug, info, warn};

use crate::document::Comment;
use crate::storage::DocumentStore;
use crate::types::identifiers::DocumentId;
use crate::types::payloads::NewComment;

use super::ServiceError;

/// Comment creation and retrieval.
///
/// Location validation is delegated to the location variant itself, against
/// the document snapshot loaded here. A document edit landing between that
/// snapshot and the comment write is an accepted best-effort window; comment
/// creation never mutates the document or its version.
pub struct CommentService<S> {
    store: S,
}

impl<S: DocumentStore> CommentService<S> {
    pub fn new(store: S) -> Self {
        CommentService { store }
    }

    /// Comments on a document, oldest first.
    pub fn comments_for_document(
        &self,
        document_id: &DocumentId,
    ) -> Result<Vec<Comment>, ServiceError> {
        info!(document_id = %document_id, "fetching comments");
        if !self.store.document_exists(document_id)? {
            warn!(document_id = %document_id, "document not found");
            return Err(ServiceError::DocumentNotFound(*document_id));
        }
        let comments = self.store.comments_by_created_at_asc(document_id)?;
        debug!(count = comments.len(), "found comments");
        Ok(comments)
    }

    /// Create a comment after validating its location against the target
    /// document. Exactly one document read and one comment write.
    pub fn create_comment(
        &self,
        document_id: &DocumentId,
        new: NewComment,
    ) -> Result<Comment, ServiceError> {
        info!(document_id = %document_id, author = %new.author, "creating comment");
        let document = self
            .store
            .find_document_by_id(document_id)?
            .ok_or(ServiceError::DocumentNotFound(*document_id))?;

        new.location.validate(Some(&document))?;

        let comment = Comment::create(document.id, new)?;
        let saved = self.store.save_comment(comment)?;
        info!(comment_id = %saved.id, document_id = %document_id, "comment created");
        Ok(saved)
    }

    /// Comments on a document by one author, oldest first.
    pub fn comments_by_author(
        &self,
        document_id: &DocumentId,
        author: &str,
    ) -> Result<Vec<Comment>, ServiceError> {
        let comments = self.store.comments_by_author(document_id, author)?;
        debug!(count = comments.len(), author, "found comments by author");
        Ok(comments)
    }

    /// Comments whose location addresses the given paragraph, oldest first.
    pub fn comments_for_paragraph(
        &self,
        document_id: &DocumentId,
        paragraph_index: usize,
    ) -> Result<Vec<Comment>, ServiceError> {
        let comments = self
            .store
            .comments_for_paragraph(document_id, paragraph_index)?;
        debug!(count = comments.len(), paragraph_index, "found comments in paragraph");
        Ok(comments)
    }
}
