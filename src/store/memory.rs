//! In-memory record store with mock family-office data

use super::traits::RecordStore;
use crate::entities::RecordKind;
use crate::state::{FieldValue, FormValues, StoredRecord};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

/// Record store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<StoredRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a handful of records per kind
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (age_days, (kind, pairs)) in seed_records().into_iter().enumerate() {
            let values: FormValues = pairs.into_iter().collect();
            store.records.push(StoredRecord {
                id: Uuid::new_v4(),
                kind,
                created_at: Utc::now() - Duration::days(age_days as i64 + 1),
                values,
            });
        }
        tracing::debug!("Seeded in-memory store with {} records", store.len());
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn text(key: &'static str, value: &str) -> (&'static str, FieldValue) {
    (key, FieldValue::from(value))
}

fn seed_records() -> Vec<(RecordKind, Vec<(&'static str, FieldValue)>)> {
    vec![
        (
            RecordKind::Company,
            vec![
                text("type", "Family Business"),
                text("category", "Operating"),
                text("name", "Harbor Street Bakeries"),
                text("industry", "Consumer"),
                text("relationship", "Portfolio Company"),
                ("employees", FieldValue::Number(240.0)),
            ],
        ),
        (
            RecordKind::Company,
            vec![
                text("type", "Investment Firm"),
                text("category", "Investment"),
                text("name", "Northgate Capital Partners"),
                text("industry", "Financial Services"),
                text("relationship", "Partner"),
            ],
        ),
        (
            RecordKind::Person,
            vec![
                text("type", "Family Member"),
                text("category", "Family"),
                text("fullName", "Eleanor Whitfield"),
                text("relationship", "Family Member"),
                text("birthday", "1956-04-12"),
            ],
        ),
        (
            RecordKind::Person,
            vec![
                text("type", "Attorney"),
                text("category", "Service Provider"),
                text("fullName", "Marcus Adeyemi"),
                text("email", "madeyemi@adeyemi-law.com"),
                text("relationship", "Attorney"),
            ],
        ),
        (
            RecordKind::Entity,
            vec![
                text("type", "Irrevocable Trust"),
                text("category", "Trust"),
                text("name", "Whitfield Dynasty Trust"),
                text("entityType", "Irrevocable Trust"),
                text("jurisdiction", "South Dakota"),
                text("status", "Active"),
            ],
        ),
        (
            RecordKind::Opportunity,
            vec![
                text("type", "Fund Commitment"),
                text("category", "Funds"),
                text("name", "Northgate Fund IV"),
                text("assetClass", "Fund"),
                text("stage", "Due Diligence"),
                ("amount", FieldValue::Number(5_000_000.0)),
                ("probability", FieldValue::Number(60.0)),
            ],
        ),
        (
            RecordKind::Note,
            vec![
                text("type", "Meeting Notes"),
                text("category", "Interaction"),
                text("title", "Quarterly review with Northgate"),
                text("visibility", "Family"),
                text("content", "Reviewed Fund III marks and Fund IV timeline."),
            ],
        ),
        (
            RecordKind::File,
            vec![
                text("type", "Legal Document"),
                text("category", "Legal"),
                text("fileName", "Whitfield Dynasty Trust Deed.pdf"),
                text("documentType", "Legal Document"),
                text("relatedTo", "Whitfield Dynasty Trust"),
            ],
        ),
    ]
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn save_record(&mut self, kind: RecordKind, values: FormValues) -> Result<StoredRecord> {
        if values.is_empty() {
            bail!("Refusing to store an empty {} record", kind.label());
        }
        let record = StoredRecord {
            id: Uuid::new_v4(),
            kind,
            created_at: Utc::now(),
            values,
        };
        tracing::info!(
            id = %record.id,
            kind = kind.label(),
            record = %record.values.to_json(),
            "Stored record"
        );
        self.records.push(record.clone());
        Ok(record)
    }

    async fn list_records(&mut self, kind: RecordKind) -> Result<Vec<StoredRecord>> {
        let mut records: Vec<StoredRecord> = self
            .records
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn counts(&mut self) -> Result<Vec<(RecordKind, usize)>> {
        Ok(RecordKind::ALL
            .iter()
            .map(|kind| {
                let count = self.records.iter().filter(|r| r.kind == *kind).count();
                (*kind, count)
            })
            .collect())
    }
}
