//! Skill catalog port.
//!
//! The catalog maps a skill to its fixed position inside its combat book.
//! Only the combat-slot encoding pass consults it.

use std::collections::HashMap;

/// Catalog attributes of a skill relevant to packet encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillInfo {
    /// 1-based wire position of the skill inside its combat book.
    pub book_position: usize,
}

/// Lookup into the externally managed skill catalog.
pub trait SkillCatalog {
    /// Describe a skill; `None` for ids the catalog does not know.
    fn describe(&self, skill_id: u32) -> Option<SkillInfo>;
}

/// Map-backed catalog, filled once at boot from the catalog table.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    positions: HashMap<u32, usize>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill at its book position.
    pub fn insert(&mut self, skill_id: u32, book_position: usize) {
        self.positions.insert(skill_id, book_position);
    }
}

impl FromIterator<(u32, usize)> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = (u32, usize)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl SkillCatalog for StaticCatalog {
    fn describe(&self, skill_id: u32) -> Option<SkillInfo> {
        self.positions
            .get(&skill_id)
            .map(|&book_position| SkillInfo { book_position })
    }
}
