//! SQLite skill record store.
//!
//! Implements `SkillStore` from `grimoire-core` using sqlx with split
//! read/write pools.

use grimoire_core::repository::skills::SkillStore;
use grimoire_types::character::CharacterId;
use grimoire_types::error::StoreError;
use grimoire_types::skills::SkillRecord;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SkillStore`.
pub struct SqliteSkillStore {
    pool: DatabasePool,
}

impl SqliteSkillStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn query_error(e: sqlx::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

impl SkillStore for SqliteSkillStore {
    async fn insert(&self, record: &SkillRecord) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO skills (character_id, skill_points, layout) VALUES (?, ?, ?)")
            .bind(record.character_id.0)
            .bind(record.skill_points)
            .bind(&record.layout)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn update(&self, record: &SkillRecord) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE skills SET skill_points = ?, layout = ? WHERE character_id = ?")
                .bind(record.skill_points)
                .bind(&record.layout)
                .bind(record.character_id.0)
                .execute(&self.pool.writer)
                .await
                .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, record: &SkillRecord) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM skills WHERE character_id = ?")
            .bind(record.character_id.0)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn select_by_id(&self, id: CharacterId) -> Result<Option<SkillRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT character_id, skill_points, layout FROM skills WHERE character_id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(query_error)?;

        match row {
            Some(row) => Ok(Some(SkillRecord {
                character_id: CharacterId(row.try_get("character_id").map_err(query_error)?),
                skill_points: row.try_get("skill_points").map_err(query_error)?,
                layout: row.try_get("layout").map_err(query_error)?,
            })),
            None => Ok(None),
        }
    }
}
