//! Skill record store trait definition.

use grimoire_types::character::CharacterId;
use grimoire_types::error::StoreError;
use grimoire_types::skills::SkillRecord;

/// Repository trait for skill record persistence.
///
/// Implementations live in grimoire-infra (e.g., SqliteSkillStore).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait SkillStore: Send + Sync {
    /// Insert a freshly created record.
    fn insert(
        &self,
        record: &SkillRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Persist a modified record over the existing row.
    fn update(
        &self,
        record: &SkillRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a record's row. Cache eviction is the caller's concern.
    fn delete(
        &self,
        record: &SkillRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Fetch the record for a character; `None` when no row exists.
    fn select_by_id(
        &self,
        id: CharacterId,
    ) -> impl std::future::Future<Output = Result<Option<SkillRecord>, StoreError>> + Send;
}
