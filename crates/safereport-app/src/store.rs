//! Staged attachments, oldest first.

use safereport_core::{Attachment, AttachmentId};

/// Ordered set of sanitized attachments pending submission.
///
/// Only records produced by a completed intake batch are ever appended, so
/// every entry has passed validation and sanitization.
#[derive(Debug, Default)]
pub struct AttachmentStore {
    records: Vec<Attachment>,
}

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a whole batch to the end of the sequence.
    pub fn append(&mut self, records: impl IntoIterator<Item = Attachment>) {
        self.records.extend(records);
    }

    /// Remove the record with `id`. Returns it when present; absent ids are a no-op.
    pub fn remove(&mut self, id: &AttachmentId) -> Option<Attachment> {
        let index = self.records.iter().position(|a| &a.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.records.iter().find(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Attachment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of sanitized sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|a| a.size as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use safereport_core::{SanitizationLevel, SanitizedFile};

    fn record(name: &str, len: usize) -> Attachment {
        Attachment::from(SanitizedFile {
            name: name.to_string(),
            media_type: "text/plain".to_string(),
            data: vec![0u8; len].into(),
            sanitized_at: Utc::now(),
            level: SanitizationLevel::CopiedOnly,
        })
    }

    #[test]
    fn test_append_then_remove_keeps_the_other() {
        let mut store = AttachmentStore::new();
        let a = record("a.txt", 1);
        let b = record("b.txt", 2);
        let (a_id, b_id) = (a.id, b.id);

        store.append(vec![a, b]);
        let removed = store.remove(&a_id).unwrap();

        assert_eq!(removed.name, "a.txt");
        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].id, b_id);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = AttachmentStore::new();
        store.append(vec![record("a.txt", 1)]);
        assert!(store.remove(&AttachmentId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_batches_keep_insertion_order() {
        let mut store = AttachmentStore::new();
        store.append(vec![record("1", 1), record("2", 1)]);
        store.append(vec![record("3", 1)]);
        let names: Vec<_> = store.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_reset_and_total_size() {
        let mut store = AttachmentStore::new();
        store.append(vec![record("a", 10), record("b", 5)]);
        assert_eq!(store.total_size(), 15);

        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.total_size(), 0);
    }
}
