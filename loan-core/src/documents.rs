//! Uploaded-document ledger.
//!
//! Uploads are simulated: the "file" is only its metadata. Any identifier
//! may be recorded, but completeness is judged against the four canonical
//! [`DocumentId`]s alone.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DocumentId, DocumentMeta};

/// Declared-size cap per upload, 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The declared size exceeds the cap; nothing is recorded.
    #[error("file size should not exceed 5MB (got {size_bytes} bytes)")]
    TooLarge { size_bytes: u64 },
}

/// The set of uploads recorded so far, keyed by raw document identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentSet(BTreeMap<String, DocumentMeta>);

impl DocumentSet {
    /// Records an upload. Re-uploading under the same identifier replaces
    /// the previous record.
    pub fn record(&mut self, id: &str, meta: DocumentMeta) -> Result<(), UploadError> {
        if meta.size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size_bytes: meta.size_bytes,
            });
        }
        self.0.insert(id.to_string(), meta);
        Ok(())
    }

    pub fn get(&self, id: DocumentId) -> Option<&DocumentMeta> {
        self.0.get(id.as_str())
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.0.contains_key(id.as_str())
    }

    /// True iff all four canonical documents are present.
    pub fn is_complete(&self) -> bool {
        DocumentId::ALL.iter().all(|id| self.contains(*id))
    }

    /// Canonical documents still missing; extra identifiers never reduce it.
    pub fn remaining_count(&self) -> usize {
        DocumentId::ALL
            .iter()
            .filter(|id| !self.contains(**id))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentMeta)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn meta(size_bytes: u64) -> DocumentMeta {
        DocumentMeta {
            name: "statement.pdf".to_string(),
            size_bytes,
            mime_type: "application/pdf".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn completeness_requires_all_four_canonical_documents() {
        let mut docs = DocumentSet::default();
        for id in [
            DocumentId::BankStatement,
            DocumentId::DealerInvoice,
            DocumentId::GstDoc,
        ] {
            docs.record(id.as_str(), meta(1024)).unwrap();
        }

        assert!(!docs.is_complete());
        assert_eq!(docs.remaining_count(), 1);

        docs.record(DocumentId::ItrDoc.as_str(), meta(1024)).unwrap();
        assert!(docs.is_complete());
        assert_eq!(docs.remaining_count(), 0);
    }

    #[test]
    fn non_canonical_ids_are_stored_but_do_not_count() {
        let mut docs = DocumentSet::default();
        docs.record("salarySlip", meta(1024)).unwrap();

        assert_eq!(docs.len(), 1);
        assert!(!docs.is_complete());
        assert_eq!(docs.remaining_count(), 4);
    }

    #[test]
    fn oversized_upload_is_rejected_and_nothing_recorded() {
        let mut docs = DocumentSet::default();
        let result = docs.record(
            DocumentId::BankStatement.as_str(),
            meta(MAX_UPLOAD_BYTES + 1),
        );

        assert_eq!(
            result,
            Err(UploadError::TooLarge {
                size_bytes: MAX_UPLOAD_BYTES + 1
            })
        );
        assert!(docs.is_empty());
    }

    #[test]
    fn exact_cap_size_is_allowed() {
        let mut docs = DocumentSet::default();
        docs.record(DocumentId::GstDoc.as_str(), meta(MAX_UPLOAD_BYTES))
            .unwrap();
        assert!(docs.contains(DocumentId::GstDoc));
    }

    #[test]
    fn reupload_replaces_the_previous_record() {
        let mut docs = DocumentSet::default();
        docs.record(DocumentId::ItrDoc.as_str(), meta(100)).unwrap();
        docs.record(DocumentId::ItrDoc.as_str(), meta(200)).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs.get(DocumentId::ItrDoc).unwrap().size_bytes, 200);
    }
}
