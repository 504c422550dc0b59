//! In-memory collection for local runs and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::{CollectionError, MediaCollection};
use crate::media::MediaRecord;

/// Collection held in process memory.
///
/// `set_unavailable(true)` makes every call fail, which stands in for an
/// unreachable backend.
#[derive(Default)]
pub struct MemoryCollection {
    records: RwLock<Vec<MediaRecord>>,
    unavailable: AtomicBool,
}

impl MemoryCollection {
    pub fn new(records: Vec<MediaRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), CollectionError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CollectionError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MediaCollection for MemoryCollection {
    async fn list(&self) -> Result<Vec<MediaRecord>, CollectionError> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), CollectionError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(CollectionError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
