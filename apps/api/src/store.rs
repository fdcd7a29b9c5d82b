//! Single-slot resume store shared through `AppState`.
//!
//! Holds at most one resume for the whole process. Saving replaces the
//! previous record; readers get an `Arc` snapshot and never observe a
//! partially written record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Serialize)]
pub struct StoredResume {
    #[serde(flatten)]
    pub record: ResumeRecord,
    pub saved_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct ResumeStore {
    slot: Arc<Mutex<Option<Arc<StoredResume>>>>,
}

impl ResumeStore {
    pub async fn save(&self, record: ResumeRecord) -> Arc<StoredResume> {
        let stored = Arc::new(StoredResume {
            record,
            saved_at: Utc::now(),
        });
        *self.slot.lock().await = Some(Arc::clone(&stored));
        stored
    }

    pub async fn get(&self) -> Option<Arc<StoredResume>> {
        self.slot.lock().await.clone()
    }

    /// Empties the slot. Returns whether a resume was present.
    pub async fn clear(&self) -> bool {
        self.slot.lock().await.take().is_some()
    }

    pub async fn has_resume(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
