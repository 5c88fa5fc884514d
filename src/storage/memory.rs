use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::document::{Comment, Document};
use crate::types::identifiers::DocumentId;

use super::{DocumentStore, StorageError};

#[derive(Debug, Default)]
struct Inner {
    documents: BTreeMap<DocumentId, Document>,
    // Insertion order; creation-time ordering falls out of a stable sort.
    comments: Vec<Comment>,
}

/// In-process reference store.
///
/// Cloning is cheap and clones share state, so one store can back both
/// services. The whole store sits behind a single lock, which makes
/// `save_document` and `delete_document` naturally atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn find_document_by_id(&self, id: &DocumentId) -> Result<Option<Document>, StorageError> {
        Ok(self.inner.read().documents.get(id).cloned())
    }

    fn document_exists(&self, id: &DocumentId) -> Result<bool, StorageError> {
        Ok(self.inner.read().documents.contains_key(id))
    }

    fn save_document(&self, document: Document) -> Result<Document, StorageError> {
        let mut inner = self.inner.write();

        let stored = match inner.documents.get(&document.id) {
            None => document,
            Some(existing) => {
                if existing.version != document.version {
                    return Err(StorageError::VersionConflict {
                        expected: document.version,
                        actual: existing.version,
                    });
                }
                let mut bumped = document;
                bumped.version = bumped.version.next();
                bumped
            }
        };

        inner.documents.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn delete_document(&self, id: &DocumentId) -> Result<(), StorageError> {
        let mut inner = self.inner.write();
        inner.documents.remove(id);
        inner.comments.retain(|comment| comment.document_id != *id);
        Ok(())
    }

    fn all_documents_by_updated_at_desc(&self) -> Result<Vec<Document>, StorageError> {
        let mut documents: Vec<Document> =
            self.inner.read().documents.values().cloned().collect();
        sort_by_updated_at_desc(&mut documents);
        Ok(documents)
    }

    fn documents_by_title_contains(&self, fragment: &str) -> Result<Vec<Document>, StorageError> {
        let needle = fragment.to_lowercase();
        let mut documents: Vec<Document> = self
            .inner
            .read()
            .documents
            .values()
            .filter(|document| document.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        sort_by_updated_at_desc(&mut documents);
        Ok(documents)
    }

    fn save_comment(&self, comment: Comment) -> Result<Comment, StorageError> {
        self.inner.write().comments.push(comment.clone());
        Ok(comment)
    }

    fn comments_by_created_at_asc(
        &self,
        document_id: &DocumentId,
    ) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments_where(|comment| comment.document_id == *document_id))
    }

    fn comments_by_author(
        &self,
        document_id: &DocumentId,
        author: &str,
    ) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments_where(|comment| {
            comment.document_id == *document_id && comment.author == author
        }))
    }

    fn comments_for_paragraph(
        &self,
        document_id: &DocumentId,
        paragraph_index: usize,
    ) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments_where(|comment| {
            comment.document_id == *document_id
                && comment.location.paragraph_index() == Some(paragraph_index)
        }))
    }
}

impl MemoryStore {
    fn comments_where(&self, keep: impl Fn(&Comment) -> bool) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .inner
            .read()
            .comments
            .iter()
            .filter(|comment| keep(comment))
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);
        comments
    }
}

fn sort_by_updated_at_desc(documents: &mut [Document]) {
    // Tie-break on id for a deterministic order under equal timestamps.
    documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
}
