pub mod comments;
pub mod documents;

pub use comments::CommentService;
pub use documents::DocumentService;

use thiserror::Error;

use crate::document::{CommentError, DocumentError};
use crate::location::LocationError;
use crate::storage::StorageError;
use crate::types::identifiers::{DocumentId, DocumentVersion};

/// Failure taxonomy shared by both services.
///
/// The calling boundary maps these 1:1 onto its own categories (not-found,
/// bad-request, conflict) and surfaces the carried message verbatim. Every
/// variant is terminal for the current operation; nothing is retried here.
/// Anything landing in [`ServiceError::Storage`] is an unclassified backend
/// failure the core does not attempt to interpret.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("document not found with id: {0}")]
    DocumentNotFound(DocumentId),
    #[error("invalid comment location: {0}")]
    InvalidLocation(#[from] LocationError),
    #[error("document has been modified by another editor: expected version {expected}, current version {actual}; refresh and retry")]
    VersionConflict {
        expected: DocumentVersion,
        actual: DocumentVersion,
    },
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),
    #[error("invalid comment: {0}")]
    InvalidComment(#[from] CommentError),
    #[error(transparent)]
    Storage(StorageError),
}

/// A write-time conflict from the store is the same caller-visible event as
/// a failed version pre-check, so it converts to the same error.
impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::VersionConflict { expected, actual } => {
                ServiceError::VersionConflict { expected, actual }
            }
            other => ServiceError::Storage(other),
        }
    }
}
