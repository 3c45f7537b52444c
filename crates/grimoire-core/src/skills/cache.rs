//! Process-wide cache of per-character skill records.
//!
//! One instance is created at process start with its store injected and
//! lives until shutdown. Lookups hit the sharded map first and fall back to
//! the store; no map guard is held across the store round-trip, so a cold
//! miss can block on I/O without stalling other sessions. Two sessions
//! missing the same cold key may both load and both insert; records are
//! immutable-by-identity value snapshots of durable state, so the second
//! insert overwrites the first with an equivalent value.
//!
//! There is no per-record lock. A record's decode/mutate/encode/save cycle
//! is not atomic against other sessions writing the same character; last
//! write wins. That holds only while a character is driven by at most one
//! active session.

use std::sync::Arc;

use dashmap::DashMap;
use grimoire_types::character::CharacterId;
use grimoire_types::error::StoreError;
use grimoire_types::skills::SkillRecord;
use tracing::debug;

use crate::repository::skills::SkillStore;
use crate::skills::codec;

/// Shared map of loaded skill records with lazy store fallback.
pub struct SkillCache<S> {
    records: DashMap<CharacterId, Arc<SkillRecord>>,
    store: S,
}

impl<S: SkillStore> SkillCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            records: DashMap::new(),
            store,
        }
    }

    /// Fetch a character's record, loading it from the store on a cold miss.
    ///
    /// `Ok(None)` means the store has no row for this character; store
    /// failures other than not-found propagate.
    pub async fn get(&self, id: CharacterId) -> Result<Option<Arc<SkillRecord>>, StoreError> {
        if let Some(record) = self.records.get(&id) {
            return Ok(Some(Arc::clone(&record)));
        }

        let Some(record) = self.store.select_by_id(id).await? else {
            return Ok(None);
        };

        debug!(character = %id, "skill record loaded into cache");
        let record = Arc::new(record);
        self.records.insert(id, Arc::clone(&record));
        Ok(Some(record))
    }

    /// Create the record that accompanies a new character: zero points,
    /// every slot empty.
    pub async fn create(&self, id: CharacterId) -> Result<Arc<SkillRecord>, StoreError> {
        let record = SkillRecord {
            character_id: id,
            skill_points: 0,
            layout: codec::DEFAULT_LAYOUT.to_string(),
        };
        self.store.insert(&record).await?;

        let record = Arc::new(record);
        self.records.insert(id, Arc::clone(&record));
        Ok(record)
    }

    /// Persist a modified record and refresh the cached snapshot.
    pub async fn save(&self, record: SkillRecord) -> Result<Arc<SkillRecord>, StoreError> {
        self.store.update(&record).await?;

        let record = Arc::new(record);
        self.records.insert(record.character_id, Arc::clone(&record));
        Ok(record)
    }

    /// Evict and delete a record when its character is deleted.
    pub async fn delete(&self, record: &SkillRecord) -> Result<(), StoreError> {
        self.evict(record.character_id);
        self.store.delete(record).await
    }

    /// Drop a character's entry from the map.
    pub fn evict(&self, id: CharacterId) {
        self.records.remove(&id);
        debug!(character = %id, "skill record evicted");
    }
}
