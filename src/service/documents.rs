use tracing::{debug, info, warn};

use crate::document::Document;
use crate::storage::DocumentStore;
use crate::types::identifiers::{DocumentId, DocumentVersion};
use crate::types::payloads::{DocumentPatch, NewDocument};

use super::ServiceError;

/// Document lifecycle with optimistic-concurrency enforcement.
///
/// No in-process locks are taken: concurrent updates against the same
/// document are resolved by the version pre-check below plus the storage
/// layer's conditional write.
pub struct DocumentService<S> {
    store: S,
}

impl<S: DocumentStore> DocumentService<S> {
    pub fn new(store: S) -> Self {
        DocumentService { store }
    }

    pub fn create_document(&self, new: NewDocument) -> Result<Document, ServiceError> {
        info!(title = %new.title, "creating document");
        let document = Document::create(new)?;
        let saved = self.store.save_document(document)?;
        info!(document_id = %saved.id, "document created");
        Ok(saved)
    }

    pub fn get_document(&self, id: &DocumentId) -> Result<Document, ServiceError> {
        self.store
            .find_document_by_id(id)?
            .ok_or(ServiceError::DocumentNotFound(*id))
    }

    /// All documents, most recently updated first.
    pub fn list_documents(&self) -> Result<Vec<Document>, ServiceError> {
        let documents = self.store.all_documents_by_updated_at_desc()?;
        debug!(count = documents.len(), "listed documents");
        Ok(documents)
    }

    /// Case-insensitive title search.
    pub fn search_documents(&self, title_fragment: &str) -> Result<Vec<Document>, ServiceError> {
        let documents = self.store.documents_by_title_contains(title_fragment)?;
        debug!(count = documents.len(), title_fragment, "searched documents");
        Ok(documents)
    }

    /// Compare-and-swap update.
    ///
    /// The caller states the version it last observed; a stored version that
    /// differs rejects the update before any field is touched. A race that
    /// slips past this pre-check (two callers reading the same version) is
    /// caught by the store's conditional write and reported as the same
    /// conflict error. On success the returned document carries the new
    /// version.
    pub fn update_document(
        &self,
        id: &DocumentId,
        expected_version: DocumentVersion,
        patch: DocumentPatch,
    ) -> Result<Document, ServiceError> {
        info!(document_id = %id, expected_version = %expected_version, "updating document");
        let mut document = self
            .store
            .find_document_by_id(id)?
            .ok_or(ServiceError::DocumentNotFound(*id))?;

        if document.version != expected_version {
            warn!(
                document_id = %id,
                expected = %expected_version,
                actual = %document.version,
                "version conflict on update"
            );
            return Err(ServiceError::VersionConflict {
                expected: expected_version,
                actual: document.version,
            });
        }

        document.apply(patch)?;

        let updated = self.store.save_document(document)?;
        info!(document_id = %id, version = %updated.version, "document updated");
        Ok(updated)
    }

    /// Delete a document; its comments go with it.
    pub fn delete_document(&self, id: &DocumentId) -> Result<(), ServiceError> {
        info!(document_id = %id, "deleting document");
        if !self.store.document_exists(id)? {
            warn!(document_id = %id, "document not found");
            return Err(ServiceError::DocumentNotFound(*id));
        }
        self.store.delete_document(id)?;
        info!(document_id = %id, "document deleted");
        Ok(())
    }
}
