//! Trait abstraction for the record store to enable mocking in tests

use crate::entities::RecordKind;
use crate::state::{FormValues, StoredRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence collaborator receiving records from creation dialogs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a newly created record
    async fn save_record(&mut self, kind: RecordKind, values: FormValues) -> Result<StoredRecord>;

    /// List records of one kind, newest first
    async fn list_records(&mut self, kind: RecordKind) -> Result<Vec<StoredRecord>>;

    /// Number of stored records per kind, in `RecordKind::ALL` order
    async fn counts(&mut self) -> Result<Vec<(RecordKind, usize)>>;
}
