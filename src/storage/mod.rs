pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::document::{Comment, Document};
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum StorageError {
    /// The conditional write found a version other than the one the caller
    /// read. The document service translates this into its own conflict
    /// error; it must never leak to the boundary as a storage failure.
    #[error("conditional write rejected: expected version {expected}, found {actual}")]
    VersionConflict {
        expected: DocumentVersion,
        actual: DocumentVersion,
    },
    /// Unclassified backend failure. The core surfaces it without retrying
    /// or interpreting it.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence seam consumed by the services.
///
/// Implementations are storage-agnostic; the one hard requirement is that
/// `save_document` performs a version-conditional write (the equivalent of
/// `WHERE version = expected`) and signals a mismatch distinctly, because
/// that write is the second line of defense behind the service-level
/// version pre-check.
pub trait DocumentStore {
    fn find_document_by_id(&self, id: &DocumentId) -> Result<Option<Document>, StorageError>;

    fn document_exists(&self, id: &DocumentId) -> Result<bool, StorageError>;

    /// Version-conditional write. An unknown id is inserted as-is; a known
    /// id is compared against the stored version, then persisted with the
    /// version advanced exactly once, or rejected with
    /// [`StorageError::VersionConflict`]. Returns the stored form.
    fn save_document(&self, document: Document) -> Result<Document, StorageError>;

    /// Delete a document and all its comments in one atomic step.
    fn delete_document(&self, id: &DocumentId) -> Result<(), StorageError>;

    fn all_documents_by_updated_at_desc(&self) -> Result<Vec<Document>, StorageError>;

    /// Case-insensitive title-contains filter, most recently updated first.
    fn documents_by_title_contains(&self, fragment: &str) -> Result<Vec<Document>, StorageError>;

    fn save_comment(&self, comment: Comment) -> Result<Comment, StorageError>;

    fn comments_by_created_at_asc(
        &self,
        document_id: &DocumentId,
    ) -> Result<Vec<Comment>, StorageError>;

    fn comments_by_author(
        &self,
        document_id: &DocumentId,
        author: &str,
    ) -> Result<Vec<Comment>, StorageError>;

    /// Comments whose location addresses the given paragraph.
    fn comments_for_paragraph(
        &self,
        document_id: &DocumentId,
        paragraph_index: usize,
    ) -> Result<Vec<Comment>, StorageError>;
}
